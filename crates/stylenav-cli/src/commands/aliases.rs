//! Aliases command implementation.

use serde_json::json;

use crate::cli::AliasesArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use stylenav_config::NavigatorSettings;

/// Execute the aliases command.
///
/// Text output is the config path followed by one `alias -> target` line
/// per alias, in declaration order. With `--json`, a single object with
/// `config`, `project_root` and `aliases` keys.
pub fn execute(args: AliasesArgs, settings: &NavigatorSettings) -> Result<()> {
    let cwd = utils::get_cwd()?;
    let dir = utils::resolve_path(&args.dir, &cwd);
    let workspace = utils::workspace_for(settings, &cwd, &dir);

    let navigator = utils::navigator(settings);
    let location = navigator.locate(&dir, &workspace);
    let aliases = navigator.aliases(&dir, &workspace);

    if args.json {
        let entries: Vec<_> = aliases
            .iter()
            .map(|(alias, target)| json!({ "alias": alias, "target": target.display().to_string() }))
            .collect();
        let output = json!({
            "config": location.as_ref().map(|l| l.config_path.display().to_string()),
            "project_root": location.as_ref().map(|l| l.project_root.display().to_string()),
            "aliases": entries,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let Some(location) = location else {
        ui::warning(&format!(
            "No tsconfig.json or jsconfig.json found between {} and {}",
            dir.display(),
            workspace.display()
        ));
        return Ok(());
    };

    println!("{}", location.config_path.display());
    if aliases.is_empty() {
        ui::info("No path aliases defined");
        return Ok(());
    }
    for (alias, target) in aliases.iter() {
        println!("{alias} -> {}", target.display());
    }
    ui::success(&format!("{} aliases", aliases.len()));
    Ok(())
}
