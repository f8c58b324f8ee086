use serde::{Deserialize, Serialize};

/// The role a field plays inside a component body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum UsageContext {
    AsText,
    StyleOrClassName,
    EventHandlerOrFunction,
    ConditionalRendering,
    Container,
    #[default]
    AsProp,
}

impl UsageContext {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AsText => "asText",
            Self::StyleOrClassName => "styleOrClassName",
            Self::EventHandlerOrFunction => "eventHandlerOrFunction",
            Self::ConditionalRendering => "conditionalRendering",
            Self::Container => "container",
            Self::AsProp => "asProp",
        }
    }
}

impl std::fmt::Display for UsageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UsageAnnotation {
    pub context: UsageContext,
    /// The nearest markup element at the deciding site carries the test-id attribute.
    pub has_test_identifier: bool,
    /// Whether any rule fired for the field.
    pub classified: bool,
}
