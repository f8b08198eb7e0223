//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use civigraph_domain::{Relation, RelationId};
use civigraph_matcher::MatcherConfig;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format relations output.
    pub fn format_relations(&self, relations: &[Relation]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_relations_json(relations),
            OutputFormat::Table => self.format_relations_table(relations),
            OutputFormat::Quiet => self.format_relations_quiet(relations),
        }
    }

    /// Format a single relation.
    pub fn format_relation(&self, relation: &Relation) -> Result<String> {
        self.format_relations(std::slice::from_ref(relation))
    }

    /// Format relations as JSON.
    fn format_relations_json(&self, relations: &[Relation]) -> Result<String> {
        let json_relations: Vec<serde_json::Value> = relations
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.id.to_string(),
                    "anchor_entity_id": r.anchor_entity_id,
                    "related_entity_type": r.related_entity_type.as_str(),
                    "related_entity_id": r.related_entity_id,
                    "relation_role": r.relation_role.as_str(),
                    "strength": r.strength,
                    "bidirectional": r.bidirectional,
                    "created_via": r.created_via.as_str(),
                    "status": r.status.as_str(),
                    "reviewed": r.reviewed,
                    "notes": r.notes,
                    "created_at": r.created_at,
                    "reviewed_by": r.reviewed_by,
                    "reviewed_at": r.reviewed_at
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_relations)?)
    }

    /// Format relations as a table.
    fn format_relations_table(&self, relations: &[Relation]) -> Result<String> {
        if relations.is_empty() {
            return Ok(self.colorize("No relations found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record([
            "ID", "Anchor", "Role", "Related", "Type", "Strength", "Status", "Via",
        ]);

        for relation in relations {
            let id = relation.id.to_string();
            builder.push_record([
                &id[..8], // Truncate ID for readability
                &relation.anchor_entity_id,
                relation.relation_role.as_str(),
                &relation.related_entity_id,
                relation.related_entity_type.as_str(),
                &relation.strength.to_string(),
                relation.status.as_str(),
                relation.created_via.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format relations in quiet mode (IDs only).
    fn format_relations_quiet(&self, relations: &[Relation]) -> Result<String> {
        let ids: Vec<String> = relations.iter().map(|r| r.id.to_string()).collect();
        Ok(ids.join("\n"))
    }

    /// Format the matcher registry.
    pub fn format_matchers(&self, matchers: &[MatcherConfig]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_matchers: Vec<serde_json::Value> = matchers
                    .iter()
                    .map(|m| {
                        serde_json::json!({
                            "id": m.id,
                            "source_type": m.source_type.as_str(),
                            "target_type": m.target_type.as_str(),
                            "relation_role": m.relation_role.as_str(),
                            "threshold": m.threshold
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_matchers)?)
            }
            OutputFormat::Quiet => {
                let ids: Vec<&str> = matchers.iter().map(|m| m.id).collect();
                Ok(ids.join("\n"))
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["ID", "Source", "Target", "Role", "Threshold"]);

                for matcher in matchers {
                    builder.push_record([
                        matcher.id,
                        matcher.source_type.as_str(),
                        matcher.target_type.as_str(),
                        matcher.relation_role.as_str(),
                        &matcher.threshold.to_string(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a deletion result.
    pub fn relation_deleted(&self, id: &RelationId) -> String {
        self.success(&format!("Relation deleted: {}", id))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civigraph_domain::{CreatedVia, EntityType, RelationRole};
    use civigraph_matcher::builtin_matchers;

    fn create_test_relation() -> Relation {
        let mut relation = Relation::new(
            "challenge#1".to_string(),
            EntityType::Solution,
            "solution#9".to_string(),
            RelationRole::SolvedBy,
            87,
            false,
            CreatedVia::Ai,
            1_700_000_000,
        );
        relation.notes = Some("AI-generated match (87% similarity)".to_string());
        relation
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let relations = vec![create_test_relation()];
        let output = formatter.format_relations(&relations).unwrap();
        assert!(output.contains("anchor_entity_id"));
        assert!(output.contains("solved_by"));
        assert!(output.contains("87"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let relations = vec![create_test_relation()];
        let output = formatter.format_relations(&relations).unwrap();
        assert!(!output.contains("anchor"));
        assert_eq!(output.len(), 36); // UUID string
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let relations = vec![create_test_relation()];
        let output = formatter.format_relations(&relations).unwrap();
        assert!(output.contains("Anchor"));
        assert!(output.contains("challenge#1"));
        assert!(output.contains("pending"));
    }

    #[test]
    fn test_empty_relations() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_relations(&[]).unwrap();
        assert!(output.contains("No relations found"));
    }

    #[test]
    fn test_matchers_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_matchers(builtin_matchers()).unwrap();
        assert!(output.contains("challenge-solution"));
        assert!(output.contains("Threshold"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
