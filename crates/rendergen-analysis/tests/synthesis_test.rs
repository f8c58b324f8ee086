//! Test synthesizer output tests.

mod common;

use rendergen_analysis::format::TreeSitterFormatter;
use std::path::Path;

use rendergen_analysis::synthesis::naming::{
    child_test_title, describe_title, event_name, field_test_title, is_generated_title,
    kebab_case, suite_name, test_id,
};
use rendergen_analysis::synthesis::{ImportPlan, OutputLocation, TestSynthesizer};
use rendergen_analysis::ComponentPipeline;
use rendergen_core::errors::SynthesisError;

use common::{fixture, fixtures_root, seeded_config, temp_tree};

fn example_text() -> String {
    let pipeline = ComponentPipeline::new(seeded_config(), &fixtures_root());
    pipeline
        .generate(&fixture("components/layout/Example/index.tsx"), "Example")
        .expect("generate Example")
}

/// The block between `const <helper> =` and the next blank line.
fn helper_block<'a>(text: &'a str, helper: &str) -> &'a str {
    let start = text
        .find(&format!("const {helper} = "))
        .unwrap_or_else(|| panic!("{helper} missing"));
    let rest = &text[start..];
    let end = rest.find("\n\n").unwrap_or(rest.len());
    &rest[..end]
}

/// The `it(...)` block whose title is `title`.
fn test_block<'a>(text: &'a str, title: &str) -> &'a str {
    let start = text
        .find(&format!("it('{title}'"))
        .unwrap_or_else(|| panic!("test {title:?} missing"));
    let rest = &text[start..];
    let end = rest.find("\n\t})").map(|e| e + 4).unwrap_or(rest.len());
    &rest[..end]
}

#[test]
fn test_naming_helpers() {
    assert_eq!(kebab_case("ChildComponent"), "child-component");
    assert_eq!(kebab_case("HTMLParser"), "html-parser");
    assert_eq!(kebab_case("Example"), "example");
    assert_eq!(kebab_case("myButton"), "my-button");
    assert_eq!(test_id("ChildComponent"), "child-component_test");

    assert_eq!(suite_name("PrefixMyButton", "Prefix"), "My Button");
    assert_eq!(suite_name("MyButton", ""), "My Button");
    assert_eq!(describe_title("Example", "Prefix"), "Example Component");

    assert!(is_generated_title("Example", &field_test_title("Example", "style")));
    assert!(is_generated_title(
        "Example",
        &child_test_title("Example", "ChildComponent")
    ));
    assert!(!is_generated_title("Example", "Example renders nicely when offline"));
    assert!(!is_generated_title("Example", "handles taps"));

    assert_eq!(event_name("onPress").as_deref(), Some("press"));
    assert_eq!(event_name("onChangeText").as_deref(), Some("changeText"));
    assert_eq!(event_name("online"), None);
    assert_eq!(event_name("renderFooter"), None);
}

#[test]
fn test_import_plan_groups_by_module() {
    let mut plan = ImportPlan::new();
    plan.add_value("react-native", "render");
    plan.add_value("..", "Card");
    plan.add_type("..", "CardProps");
    plan.add_value("..", "Card");
    plan.add_value("..", "CardHeader");
    plan.add_type("../types", "Theme");
    plan.add_type("../types", "Theme");

    assert_eq!(
        plan.lines(),
        vec![
            "import { render } from 'react-native'",
            "import { Card, CardHeader, CardProps } from '..'",
            "import { Theme } from '../types'",
        ]
    );
    assert_eq!(
        plan.specifiers().collect::<Vec<_>>(),
        vec!["react-native", "..", "../types"]
    );
}

#[test]
fn test_import_plan_default_bindings() {
    let mut plan = ImportPlan::new();
    plan.add_default("..", "Card");
    plan.add_type("..", "CardProps");
    plan.add_default("..", "Other");
    plan.add_type("..", "Card");
    plan.add_default("../types", "Theme");

    assert_eq!(
        plan.lines(),
        vec!["import Card, { CardProps } from '..'", "import Theme from '../types'"]
    );
}

#[test]
fn test_example_imports() {
    let text = example_text();
    let imports: Vec<&str> = text.lines().take_while(|l| l.starts_with("import ")).collect();
    assert_eq!(
        imports,
        vec![
            "import { render } from '@testing-library/react-native'",
            "import { findByObjectOrText } from '../../../../src/utils/jest/helpers'",
            "import { Example, ChildComponent, ExampleProps } from '..'",
            "import { CoolExternalType } from '../types'",
        ]
    );
}

#[test]
fn test_example_render_helpers() {
    let text = example_text();

    let main = helper_block(&text, "renderExampleComponent");
    let defaults: Vec<&str> = main
        .lines()
        .filter(|l| l.starts_with("\t\t"))
        .map(|l| l.trim().split(':').next().unwrap())
        .collect();
    assert_eq!(defaults, vec!["objectProp", "newProp", "testID"]);
    assert!(main.contains("\t\ttestID: 'example_test',"));
    assert!(main.contains("const props: ExampleProps = { ...defaultProps, ...values }"));
    assert!(main.contains("return render(<Example {...props} />)"));

    let child = helper_block(&text, "renderChildComponentComponent");
    assert!(child.contains("\t\tone: '"));
    assert!(child.contains("\t\ttestID: 'child-component_test',"));
    assert!(!child.contains("\t\ttwo:"));
    assert!(child.contains("const props: CoolExternalType = "));
}

#[test]
fn test_example_describe_block() {
    let text = example_text();
    assert!(text.contains("describe('Example Component', () => {"));

    for field in [
        "stringProp",
        "numberProp",
        "booleanProp",
        "objectProp",
        "arrayProp",
        "newProp",
        "style",
        "testID",
    ] {
        test_block(&text, &field_test_title("Example", field));
    }
    assert_eq!(text.matches("\tit('Example renders `").count(), 8);

    let string_test = test_block(&text, "Example renders `stringProp`");
    assert!(string_test.contains("const { getByText } = renderExampleComponent({ [propName]: propValue })"));
    assert!(string_test.contains("const element = getByText(propValue)"));
    assert!(string_test.contains("expect(element).toBeTruthy()"));

    let number_test = test_block(&text, "Example renders `numberProp`");
    assert!(number_test.contains("const element = getByTestId('numberProp-testID')"));

    let style_test = test_block(&text, "Example renders `style`");
    assert!(style_test.contains("const { container } = "));
    assert!(style_test.contains("await findByObjectOrText(container, propName, propValue)"));
    assert!(style_test.contains("expect(element.props.style).toMatchObject(propValue)"));

    let child = test_block(&text, "Example renders ChildComponent component correctly");
    assert!(child.contains("const { getByTestId } = renderChildComponentComponent({})"));
    assert!(child.contains("getByTestId('child-component_test')"));
    assert!(text.ends_with("})\n"));
}

#[test]
fn test_generated_text_is_valid_tsx() {
    let formatter = TreeSitterFormatter::new(4);
    formatter.validate(&example_text()).expect("Example output parses");

    let pipeline = ComponentPipeline::new(seeded_config(), &fixtures_root());
    let button = pipeline
        .generate(&fixture("components/forms/Button/index.tsx"), "Button")
        .unwrap();
    formatter.validate(&button).expect("Button output parses");
}

#[test]
fn test_event_handler_field() {
    let pipeline = ComponentPipeline::new(seeded_config(), &fixtures_root());
    let text = pipeline
        .generate(&fixture("components/forms/Button/index.tsx"), "Button")
        .unwrap();

    assert!(text.contains("import { ButtonProps } from '../../shared'"));
    let helper = helper_block(&text, "renderButtonComponent");
    assert!(helper.contains("\t\tonPress: jest.fn(),"));
    assert!(helper.contains("const props: ButtonProps = "));

    assert!(text.contains("import { render, fireEvent } from '@testing-library/react-native'"));
    let on_press = test_block(&text, "Button renders `onPress`");
    assert!(on_press.contains("const propValue = jest.fn()"));
    assert!(on_press.contains("getByTestId('onPress-testID')"));
    let fired = on_press.find("\t\tfireEvent(element, 'press')\n").unwrap();
    let asserted = on_press.find("\t\texpect(propValue).toHaveBeenCalled()").unwrap();
    assert!(fired < asserted, "the handler fires before the call assertion");

    let label = test_block(&text, "Button renders `label`");
    assert!(label.contains("getByText(propValue)"));
    assert!(!text.contains("renders Button component correctly"));
}

#[test]
fn test_unresolvable_siblings_are_skipped() {
    let pipeline = ComponentPipeline::new(seeded_config(), &fixtures_root());
    let bundle = pipeline
        .analyze(&fixture("components/layout/Broken/index.tsx"), "Broken")
        .unwrap();
    assert_eq!(bundle.main.name(), "Broken");
    assert!(bundle.children.is_empty());
}

#[test]
fn test_non_string_text_and_unexported_props() {
    let dir = temp_tree(&[(
        "components/Counter/index.tsx",
        r#"
interface CounterProps { count: number }
export const Counter = ({ count }: CounterProps) => <Text>{count}</Text>;
"#,
    )]);
    let pipeline = ComponentPipeline::new(seeded_config(), dir.path());
    let text = pipeline
        .generate(&dir.path().join("components/Counter/index.tsx"), "Counter")
        .unwrap();

    assert!(text.contains("import { Counter } from '..'"));
    assert!(!text.contains("CounterProps"));
    assert!(text.contains("\tconst props = { ...defaultProps, ...values }"));

    let count = test_block(&text, "Counter renders `count`");
    assert!(count.contains("const { container } = "));
    assert!(count.contains("await findByObjectOrText(container, propName, propValue)"));
    assert!(count.contains("expect(element).toBeTruthy()"));
}

#[test]
fn test_target_mismatch_is_rejected() {
    let pipeline = ComponentPipeline::new(seeded_config(), &fixtures_root());
    let path = fixture("components/layout/Example/index.tsx");
    let bundle = pipeline.analyze(&path, "Example").unwrap();
    let output = OutputLocation::new(&path, &fixtures_root(), "__tests__");

    let err = TestSynthesizer::new(&pipeline.config().synthesis)
        .synthesize(&bundle, "ChildComponent", &output)
        .unwrap_err();
    assert!(matches!(err, SynthesisError::ComponentNotFound { ref name, .. } if name == "ChildComponent"));
}

#[test]
fn test_seeded_generation_is_stable() {
    assert_eq!(example_text(), example_text());
}

#[test]
fn test_callbacks_without_event_are_not_fired() {
    let dir = temp_tree(&[(
        "components/Sheet/index.tsx",
        r#"
export interface SheetProps { renderFooter: () => any }
export const Sheet = ({ renderFooter }: SheetProps) => <View>{renderFooter()}</View>;
"#,
    )]);
    let pipeline = ComponentPipeline::new(seeded_config(), dir.path());
    let text = pipeline
        .generate(&dir.path().join("components/Sheet/index.tsx"), "Sheet")
        .unwrap();

    assert!(!text.contains("fireEvent"));
    let footer = test_block(&text, "Sheet renders `renderFooter`");
    assert!(footer.contains("expect(propValue).toHaveBeenCalled()"));
}

#[test]
fn test_default_exported_component_is_default_imported() {
    let dir = temp_tree(&[(
        "components/Card/index.tsx",
        r#"
export interface CardProps { title: string }

export default function Card({ title }: CardProps) {
    return <Text>{title}</Text>;
}
"#,
    )]);
    let pipeline = ComponentPipeline::new(seeded_config(), dir.path());
    let text = pipeline
        .generate(&dir.path().join("components/Card/index.tsx"), "Card")
        .unwrap();

    assert!(text.contains("import Card, { CardProps } from '..'"), "{text}");
    assert!(!text.contains("import { Card"));
    assert!(text.contains("return render(<Card {...props} />)"));
    TreeSitterFormatter::new(4).validate(&text).expect("output parses");
}

#[test]
fn test_default_export_of_a_declared_name() {
    let dir = temp_tree(&[(
        "components/Tile/index.tsx",
        r#"
export interface TileProps { label: string }
const Tile = ({ label }: TileProps) => <Text>{label}</Text>;
export default Tile;
"#,
    )]);
    let pipeline = ComponentPipeline::new(seeded_config(), dir.path());
    let text = pipeline
        .generate(&dir.path().join("components/Tile/index.tsx"), "Tile")
        .unwrap();
    assert!(text.contains("import Tile, { TileProps } from '..'"), "{text}");
}

#[test]
fn test_aliased_export_uses_exported_name() {
    let dir = temp_tree(&[(
        "components/Card/index.tsx",
        r#"
export interface CardProps { title: string }
export interface BadgeProps { count: number }

const Card = ({ title }: CardProps) => <Text>{title}</Text>;
const InnerBadge = ({ count }: BadgeProps) => <View><Text>{count}</Text></View>;

export { Card, InnerBadge as Badge };
"#,
    )]);
    let pipeline = ComponentPipeline::new(seeded_config(), dir.path());
    let text = pipeline
        .generate(&dir.path().join("components/Card/index.tsx"), "Card")
        .unwrap();

    assert!(
        text.contains("import { Card, Badge, CardProps, BadgeProps } from '..'"),
        "{text}"
    );
    assert!(!text.contains("InnerBadge"));
    let helper = helper_block(&text, "renderBadgeComponent");
    assert!(helper.contains("\t\ttestID: 'badge_test',"));
    assert!(helper.contains("return render(<Badge {...props} />)"));
    let child = test_block(&text, "Card renders Badge component correctly");
    assert!(child.contains("renderBadgeComponent({})"));
}

#[test]
fn test_relative_project_root_yields_relative_specifiers() {
    let path = fixture("components/layout/Example/index.tsx");
    let output = OutputLocation::new(&path, Path::new("."), "__tests__");
    assert!(output.project_root.is_absolute());
    assert_eq!(output.local_specifier(), "..");

    let pipeline = ComponentPipeline::new(seeded_config(), Path::new("."));
    let text = pipeline.generate(&path, "Example").unwrap();
    let helpers = text
        .lines()
        .find(|l| l.starts_with("import { findByObjectOrText }"))
        .unwrap();
    assert!(helpers.starts_with("import { findByObjectOrText } from '../"), "{helpers}");
    assert!(helpers.ends_with("/src/utils/jest/helpers'"));
    assert!(!helpers.contains("//"));
}

#[test]
fn test_default_imported_props_type() {
    let dir = temp_tree(&[
        (
            "components/Card/types.ts",
            "export default interface CardProps {\n    title: string;\n}\n",
        ),
        (
            "components/Card/index.tsx",
            "import CardProps from './types';\nexport const Card = ({ title }: CardProps) => <Text>{title}</Text>;\n",
        ),
    ]);
    let pipeline = ComponentPipeline::new(seeded_config(), dir.path());
    let text = pipeline
        .generate(&dir.path().join("components/Card/index.tsx"), "Card")
        .unwrap();

    assert!(text.contains("import { Card } from '..'"), "{text}");
    assert!(text.contains("import CardProps from '../types'"), "{text}");
    assert!(text.contains("const props: CardProps = "));
}
