use serde::Serialize;

use crate::components::ComponentDescriptor;
use crate::props::FieldTable;
use crate::resolution::ResolvedType;

/// A component with its resolved props type and classified fields.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedComponent {
    pub descriptor: ComponentDescriptor,
    pub props_type: ResolvedType,
    pub fields: FieldTable,
}

impl AnalyzedComponent {
    /// The exported name, used for imports, render helpers and test titles.
    pub fn name(&self) -> &str {
        self.descriptor.public_name()
    }
}

/// The unit handed to the synthesizer: the target plus exported siblings.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentBundle {
    pub main: AnalyzedComponent,
    pub children: Vec<AnalyzedComponent>,
}

impl ComponentBundle {
    pub fn new(main: AnalyzedComponent) -> Self {
        Self {
            main,
            children: Vec::new(),
        }
    }

    /// Main component first, then children in source order.
    pub fn components(&self) -> impl Iterator<Item = &AnalyzedComponent> {
        std::iter::once(&self.main).chain(self.children.iter())
    }
}
