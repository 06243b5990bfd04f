//! Output formatting for CLI

use lexicon_explorer::diff::Comparison;
use lexicon_explorer::resolve::{DanglingReference, RefLink};
use lexicon_explorer::tree::{Constraint, DefinitionCard, FieldCard, Truncated};
use lexicon_explorer::LexiconMeta;

/// One row of the document index
pub struct DocumentRow<'a> {
    pub id: &'a str,
    pub field_count: usize,
    pub meta: Option<&'a LexiconMeta>,
}

/// Format the document index, grouped by catalog category
pub fn format_document_list(rows: &[DocumentRow<'_>]) -> String {
    let mut output = String::new();
    let mut current: Option<&str> = None;

    for row in rows {
        let category = row
            .meta
            .map(|m| m.category.as_str())
            .filter(|c| !c.is_empty())
            .unwrap_or("Uncatalogued");
        if current != Some(category) {
            output.push_str(&format!("\n{}:\n", category));
            current = Some(category);
        }

        let mut markers = Vec::new();
        if let Some(meta) = row.meta {
            if meta.is_new {
                markers.push("NEW");
            }
            if meta.deprecated {
                markers.push("DEPRECATED");
            }
            if meta.has_before_after {
                markers.push("before/after");
            }
        }
        output.push_str(&format!("  {} ({} fields)", row.id, row.field_count));
        if !markers.is_empty() {
            output.push_str(&format!(" [{}]", markers.join(", ")));
        }
        output.push('\n');
    }

    output
}

/// Format a rendered document
pub fn format_document(
    id: &str,
    meta: Option<&LexiconMeta>,
    field_count: usize,
    replacement: Option<&RefLink>,
    definitions: &[DefinitionCard],
) -> String {
    let mut output = format!("{} ({} fields)\n", id, field_count);

    if let Some(meta) = meta {
        if !meta.description.is_empty() {
            output.push_str(&format!("  {}\n", meta.description));
        }
        if !meta.changes_summary.is_empty() {
            output.push_str(&format!("  Changes: {}\n", meta.changes_summary));
        }
    }
    if let Some(link) = replacement {
        output.push_str(&format!("  Deprecated, replaced by {}\n", format_link(link)));
    }

    for definition in definitions {
        output.push_str(&format!("\n#{}", definition.name));
        if let Some(kind) = &definition.kind {
            output.push_str(&format!(" · {}", kind));
        }
        if let Some(key) = &definition.record_key {
            output.push_str(&format!(" · key: {}", key));
        }
        output.push('\n');
        if let Some(description) = &definition.description {
            output.push_str(&format!("  {}\n", description));
        }

        for section in &definition.sections {
            output.push_str(&format!("  [{}]\n", section.label));
            for field in &section.fields {
                format_field(&mut output, field);
            }
        }
    }

    output
}

fn format_field(output: &mut String, field: &FieldCard) {
    let indent = "  ".repeat(field.depth + 2);
    let marker = match (field.expandable, field.expanded) {
        (true, true) => "▾ ",
        (true, false) => "▸ ",
        _ => "",
    };
    output.push_str(&format!("{}{}{}  {}", indent, marker, field.name, field.type_badge));
    for badge in &field.badges {
        output.push_str(&format!("  {}", badge.as_str()));
    }
    output.push('\n');

    if let Some(description) = &field.description {
        output.push_str(&format!("{}    {}\n", indent, description));
    }
    if !field.constraints.is_empty() {
        let strip: Vec<String> = field.constraints.iter().map(format_constraint).collect();
        output.push_str(&format!("{}    {}\n", indent, strip.join(" · ")));
    }

    for child in &field.children {
        format_field(output, child);
    }
}

fn format_truncated(values: &Truncated) -> String {
    let mut text = values.shown.join(", ");
    if values.overflow > 0 {
        text.push_str(&format!(" +{} more", values.overflow));
    }
    text
}

fn format_link(link: &RefLink) -> String {
    if link.is_navigable() {
        format!("→ {}", link.label)
    } else {
        link.label.clone()
    }
}

/// Format one member of a constraint strip
pub fn format_constraint(constraint: &Constraint) -> String {
    let label = constraint.label();
    match constraint {
        Constraint::MaxGraphemes(v)
        | Constraint::MinLength(v)
        | Constraint::MaxLength(v)
        | Constraint::Minimum(v)
        | Constraint::Maximum(v) => format!("{}: {}", label, v),
        Constraint::MaxSize(mb) => format!("{}: {}MB", label, mb),
        Constraint::Enum(values) => format!("{}: {}", label, values.join(" | ")),
        Constraint::KnownValues(values) | Constraint::Accept(values) => {
            format!("{}: {}", label, format_truncated(values))
        }
        Constraint::Ref(link) => format_link(link),
        Constraint::Union(links) => {
            let links: Vec<String> = links.iter().map(format_link).collect();
            format!("{}: {}", label, links.join(" | "))
        }
        Constraint::Items(summary) => format!("{}: {}", label, summary),
    }
}

/// Format a before/after comparison
pub fn format_comparison(comparison: &Comparison) -> String {
    let mut output = format!(
        "{}: {} → {} fields ({:+})\n",
        comparison.id, comparison.before_count, comparison.after_count, comparison.delta
    );
    if !comparison.added.is_empty() {
        output.push_str(&format!("  Added: {}\n", comparison.added.join(", ")));
    }
    if !comparison.removed.is_empty() {
        output.push_str(&format!("  Removed: {}\n", comparison.removed.join(", ")));
    }
    output
}

/// Format dangling references, one per line
pub fn format_dangling(dangling: &[DanglingReference]) -> String {
    if dangling.is_empty() {
        return "No dangling references\n".to_string();
    }
    let mut output = format!("{} dangling reference(s):\n", dangling.len());
    for d in dangling {
        output.push_str(&format!(
            "  {}#{} {}: {}\n",
            d.document, d.definition, d.path, d.reference
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_constraint() {
        assert_eq!(format_constraint(&Constraint::MaxSize(5)), "maxSize: 5MB");
        let accept = Constraint::Accept(Truncated {
            shown: vec!["png".into(), "jpeg".into()],
            overflow: 3,
        });
        assert_eq!(format_constraint(&accept), "accepts: png, jpeg +3 more");
        let link = RefLink {
            reference: "a.b#c".into(),
            label: "a.b#c".into(),
            target: None,
        };
        assert_eq!(format_constraint(&Constraint::Ref(link)), "a.b#c");
    }

    #[test]
    fn test_format_comparison() {
        let comparison = Comparison {
            id: "a.b.c".into(),
            before_count: 4,
            after_count: 2,
            delta: -2,
            added: vec![],
            removed: vec!["x".into(), "y".into()],
        };
        assert_eq!(
            format_comparison(&comparison),
            "a.b.c: 4 → 2 fields (-2)\n  Removed: x, y\n"
        );
    }
}
