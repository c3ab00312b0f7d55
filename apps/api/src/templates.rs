//! Cosmetic resume templates. Templates differ only in layout and styling;
//! the content and its ATS analysis are the same whichever one is chosen.

use serde::Serialize;

pub const DEFAULT_TEMPLATE_ID: &str = "modern";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const TEMPLATES: &[Template] = &[
    Template {
        id: "modern",
        name: "Modern",
        description: "Two-tone header with a sidebar for skills and contact details",
    },
    Template {
        id: "classic",
        name: "Classic",
        description: "Single column, serif type, conventional section order",
    },
    Template {
        id: "minimal",
        name: "Minimal",
        description: "Generous whitespace and a restrained monochrome palette",
    },
    Template {
        id: "creative",
        name: "Creative",
        description: "Accent colors and a bold name banner for design-led roles",
    },
    Template {
        id: "professional",
        name: "Professional",
        description: "Dense single column tuned for corporate and executive roles",
    },
];

pub fn find_template(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}
