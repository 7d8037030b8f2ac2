//! `newsdesk tools` — list the registered tool definitions.

use newsdesk_config::AppConfig;

pub fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (fetcher, writer) = super::build_components(config);
    let registry = newsdesk_tools::default_registry(fetcher, writer);

    let mut definitions = registry.definitions();
    definitions.sort_by(|a, b| a.name.cmp(&b.name));

    for def in definitions {
        println!("{}", def.name);
        println!("    {}", def.description);
        println!("    parameters: {}", serde_json::to_string(&def.parameters)?);
        println!();
    }

    Ok(())
}
