use anyhow::{Context, Result};
use clap::Parser;

use dockshell::cli::{CliArgs, OutputFormat};
use dockshell::config::ShellConfig;
use dockshell::config_paths::settings_base;
use dockshell::plugins::{load_plugins, PluginRegistry};
use dockshell::runtime::{load_script, run_script};
use dockshell::{HeadlessHost, LayoutSnapshot, Shell};

fn print_layout(layout: &LayoutSnapshot, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Tree => print!("{}", layout.outline()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(layout).context("Failed to encode layout")?
        ),
        OutputFormat::Yaml => print!(
            "{}",
            serde_yaml::to_string(layout).context("Failed to encode layout")?
        ),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let startup = args.into_config().map_err(anyhow::Error::msg)?;

    dockshell::tracing::init();

    let config = match &startup.settings_path {
        Some(path) => ShellConfig::load_from(path)?,
        None => ShellConfig::load(),
    };

    let plugins_dir = match &startup.plugins_dir {
        Some(dir) => dir.clone(),
        None => {
            let base = settings_base(startup.settings_path.as_deref());
            config.resolve_plugins_dir(base.as_deref())
        }
    };

    let manifests = load_plugins(&plugins_dir);
    let registry = PluginRegistry::new(manifests, &config.enabled_plugins);
    let mut shell = Shell::new(config, HeadlessHost::new(), registry);
    shell.startup(startup.viewport);

    if let Some(path) = &startup.script {
        let steps = load_script(path)?;
        run_script(&mut shell, &steps)?;
    }

    print_layout(&shell.layout(), startup.format)?;

    for window in shell.host().open_windows() {
        eprintln!("floating window: {}", window);
    }
    Ok(())
}
