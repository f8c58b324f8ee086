//! Names and titles shared by the synthesizer and the merge reconciler.

/// `ChildComponent` → `child-component`, `HTMLParser` → `html-parser`.
///
/// Each run of capitals not directly followed by a lowercase letter becomes
/// one lowercased word; a single capital before a lowercase letter starts a
/// new word. Words after the first are joined with `-`.
pub fn kebab_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_uppercase() {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let mut run_end = i;
        while run_end < chars.len() && chars[run_end].is_ascii_uppercase() {
            run_end += 1;
        }
        let run = run_end - i;
        let followed_by_lower = chars.get(run_end).is_some_and(|c| c.is_ascii_lowercase());
        let word = if followed_by_lower && run > 1 { run - 1 } else { run };
        if i > 0 {
            out.push('-');
        }
        out.extend(chars[i..i + word].iter().map(|c| c.to_ascii_lowercase()));
        i += word;
    }
    out
}

/// Test identifier given to a component by its render helper.
pub fn test_id(component: &str) -> String {
    format!("{}_test", kebab_case(component))
}

/// Lookup identifier for a field whose rendering site carries a test id.
pub fn field_test_id(field: &str) -> String {
    format!("{field}-testID")
}

/// `PrefixMyButton` → `My Button`: strip the first `affix`, space out capitals.
pub fn suite_name(component: &str, affix: &str) -> String {
    let stripped = if affix.is_empty() {
        component.to_string()
    } else {
        component.replacen(affix, "", 1)
    };
    let mut out = String::with_capacity(stripped.len() + 4);
    for c in stripped.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_string()
}

pub fn describe_title(component: &str, affix: &str) -> String {
    format!("{} Component", suite_name(component, affix))
}

pub fn render_helper(component: &str) -> String {
    format!("render{component}Component")
}

/// Event fired for an `on<Event>` prop: `onPress` → `press`,
/// `onChangeText` → `changeText`. Other names fire nothing.
pub fn event_name(prop: &str) -> Option<String> {
    let rest = prop.strip_prefix("on")?;
    let mut chars = rest.chars();
    let first = chars.next().filter(|c| c.is_ascii_uppercase())?;
    Some(first.to_ascii_lowercase().to_string() + chars.as_str())
}

pub fn field_test_title(component: &str, field: &str) -> String {
    format!("{component} renders `{field}`")
}

pub fn child_test_title(component: &str, child: &str) -> String {
    format!("{component} renders {child} component correctly")
}

/// Whether `title` has the shape of a test this engine writes for `component`.
pub fn is_generated_title(component: &str, title: &str) -> bool {
    let Some(rest) = title
        .strip_prefix(component)
        .and_then(|r| r.strip_prefix(" renders "))
    else {
        return false;
    };
    let field = rest
        .strip_prefix('`')
        .and_then(|r| r.strip_suffix('`'))
        .is_some_and(|f| !f.is_empty() && !f.contains('`'));
    let child = rest
        .strip_suffix(" component correctly")
        .is_some_and(|c| !c.is_empty() && !c.contains(' '));
    field || child
}
