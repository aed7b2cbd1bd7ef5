//! The section catalog: the fixed set of README building blocks and their
//! default ordering.

use serde::Serialize;

/// Input affordance a section expects from a form UI.
///
/// Serialized as `"text"` / `"textarea"` so catalog consumers can map the
/// kind straight onto an input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectionKind {
    /// Single-line input.
    #[serde(rename = "text")]
    SingleLine,
    /// Multi-line editor.
    #[serde(rename = "textarea")]
    MultiLine,
}

/// One entry of the section catalog.
///
/// `label`, `placeholder` and `icon` are display hints with no effect on
/// assembled output. `prefix` is the markdown fragment prepended to the
/// section's value during assembly; `title` and `license` carry one but are
/// special-cased by the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionDefinition {
    /// Stable identifier, also the key callers use in a values map.
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<&'static str>,
    pub icon: &'static str,
}

/// Every known section, in default assembly order.
pub static SECTIONS: &[SectionDefinition] = &[
    SectionDefinition {
        id: "title",
        label: "Project Title",
        placeholder: "My Awesome Project",
        kind: SectionKind::SingleLine,
        prefix: Some("# "),
        icon: "📦",
    },
    SectionDefinition {
        id: "description",
        label: "Description",
        placeholder: "A brief description of what this project does and who it's for...",
        kind: SectionKind::MultiLine,
        prefix: None,
        icon: "📝",
    },
    SectionDefinition {
        id: "features",
        label: "Features",
        placeholder: "- Feature 1\n- Feature 2\n- Feature 3",
        kind: SectionKind::MultiLine,
        prefix: Some("## Features\n\n"),
        icon: "✨",
    },
    SectionDefinition {
        id: "techStack",
        label: "Tech Stack",
        placeholder: "- React\n- TypeScript\n- Tailwind CSS",
        kind: SectionKind::MultiLine,
        prefix: Some("## Tech Stack\n\n"),
        icon: "🛠️",
    },
    SectionDefinition {
        id: "installation",
        label: "Installation",
        placeholder: "```bash\nnpm install my-project\ncd my-project\n```",
        kind: SectionKind::MultiLine,
        prefix: Some("## Installation\n\n"),
        icon: "⚙️",
    },
    SectionDefinition {
        id: "usage",
        label: "Usage / Examples",
        placeholder: "```javascript\nimport Component from 'my-project'\n\nfunction App() {\n  return <Component />\n}\n```",
        kind: SectionKind::MultiLine,
        prefix: Some("## Usage\n\n"),
        icon: "🚀",
    },
    SectionDefinition {
        id: "apiReference",
        label: "API Reference",
        placeholder: "#### Get all items\n\n```http\nGET /api/items\n```\n\n| Parameter | Type     | Description                |\n| :-------- | :------- | :------------------------- |\n| `api_key` | `string` | **Required**. Your API key |",
        kind: SectionKind::MultiLine,
        prefix: Some("## API Reference\n\n"),
        icon: "📡",
    },
    SectionDefinition {
        id: "environment",
        label: "Environment Variables",
        placeholder: "To run this project, you will need to add the following environment variables:\n\n`API_KEY`\n`ANOTHER_API_KEY`",
        kind: SectionKind::MultiLine,
        prefix: Some("## Environment Variables\n\n"),
        icon: "🔐",
    },
    SectionDefinition {
        id: "screenshots",
        label: "Screenshots",
        placeholder: "![App Screenshot](https://via.placeholder.com/468x300?text=App+Screenshot+Here)",
        kind: SectionKind::MultiLine,
        prefix: Some("## Screenshots\n\n"),
        icon: "📸",
    },
    SectionDefinition {
        id: "roadmap",
        label: "Roadmap",
        placeholder: "- [x] Initial release\n- [ ] Add more integrations\n- [ ] Multi-language support",
        kind: SectionKind::MultiLine,
        prefix: Some("## Roadmap\n\n"),
        icon: "🗺️",
    },
    SectionDefinition {
        id: "contributing",
        label: "Contributing",
        placeholder: "Contributions are always welcome!\n\nSee `contributing.md` for ways to get started.",
        kind: SectionKind::MultiLine,
        prefix: Some("## Contributing\n\n"),
        icon: "🤝",
    },
    SectionDefinition {
        id: "license",
        label: "License",
        placeholder: "MIT",
        kind: SectionKind::SingleLine,
        prefix: Some("## License\n\n"),
        icon: "📄",
    },
    SectionDefinition {
        id: "authors",
        label: "Authors",
        placeholder: "- [@yourname](https://github.com/yourname)",
        kind: SectionKind::MultiLine,
        prefix: Some("## Authors\n\n"),
        icon: "👤",
    },
    SectionDefinition {
        id: "acknowledgements",
        label: "Acknowledgements",
        placeholder: "- [Awesome README](https://github.com/matiassingers/awesome-readme)\n- [Readme.so](https://readme.so)",
        kind: SectionKind::MultiLine,
        prefix: Some("## Acknowledgements\n\n"),
        icon: "🙏",
    },
];

/// Looks up a catalog entry by id.
pub fn section_by_id(id: &str) -> Option<&'static SectionDefinition> {
    SECTIONS.iter().find(|section| section.id == id)
}

/// Catalog ids in default order, as an owned list a caller can reorder.
pub fn default_order() -> Vec<String> {
    SECTIONS.iter().map(|section| section.id.to_string()).collect()
}

/// Moves one element of an ordering from `from` to `to`.
///
/// An out-of-range `from` leaves the list untouched; `to` is clamped to the
/// end, so dragging past the last slot appends.
pub fn move_section<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }
    let moved = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, moved);
}
