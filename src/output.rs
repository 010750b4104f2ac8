use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use yansi::Paint;

use crate::models::{Application, CloudAccount, Environment};

const MAX_NAME_LENGTH: usize = 20;

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

/// Shorten names that would blow up the table
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > MAX_NAME_LENGTH {
        let head: String = name.chars().take(MAX_NAME_LENGTH - 3).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

pub fn render_accounts(accounts: &[CloudAccount]) -> String {
    if accounts.is_empty() {
        return "No accounts found".to_string();
    }

    let mut table = new_table();
    table.set_header(vec!["Name", "Provider", "ProviderID", "UpdatedAt", "CreatedAt"]);
    for acc in accounts {
        table.add_row(vec![
            truncate_name(&acc.name),
            acc.provider.clone(),
            acc.provider_id.clone(),
            acc.updated_at.clone(),
            acc.created_at.clone(),
        ]);
    }
    table.to_string()
}

pub fn render_environments(environments: &[Environment]) -> String {
    if environments.is_empty() {
        return "No environments found".to_string();
    }

    let mut sorted: Vec<&Environment> = environments.iter().collect();
    sorted.sort_by_key(|e| e.id);

    let mut table = new_table();
    table.set_header(vec!["Name", "Level", "CreatedAt", "UpdatedAt"]);
    for env in sorted {
        table.add_row(vec![
            truncate_name(&env.name),
            env.level.to_string(),
            env.created_at.clone(),
            env.updated_at.clone(),
        ]);
    }
    table.to_string()
}

/// One line per application: the name, then its environments by level
pub fn render_applications(apps: &[Application]) -> String {
    let mut lines = Vec::with_capacity(apps.len());
    for app in apps {
        let mut envs: Vec<_> = app.environments.iter().collect();
        envs.sort_by_key(|e| e.level);

        let chain = envs
            .iter()
            .map(|e| Paint::new(e.name.as_str()).green().to_string())
            .collect::<Vec<_>>()
            .join(" > ");

        if chain.is_empty() {
            lines.push(Paint::new(app.name.as_str()).cyan().to_string());
        } else {
            lines.push(format!("{}  {}", Paint::new(app.name.as_str()).cyan(), chain));
        }
    }
    lines.join("\n")
}
