use crate::config::Config;
use termion::color;

/// Prints the roster in the order names are matched.
pub fn roster(config: &Config) {
    let roster = config.roster();
    println!("Local authors ({}):", roster.len());
    for (i, entry) in roster.entries().iter().enumerate() {
        let id = entry
            .external_id
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        let institution = entry
            .institution_id
            .map(|id| {
                config
                    .institution_name(id)
                    .map_or_else(|| id.to_string(), |name| short_name(name).to_string())
            })
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {}{:>3}.{} {:<16} {:<28} {:>6}  {}",
            color::Fg(color::Yellow),
            i + 1,
            color::Fg(color::Reset),
            entry.match_key,
            entry.pretty_name,
            id,
            institution,
        );
    }
}

/// Croatian part of a bilingual institution name.
fn short_name(name: &str) -> &str {
    name.split(" / ").next().unwrap_or(name)
}
