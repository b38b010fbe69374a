use super::Parser;

#[derive(Parser, Debug)]
#[command(about = "Resolves usernames to their registered destination")]
pub struct Cli {
    /// Path to a settings TOML file
    #[arg(long)]
    pub settings: Option<String>,
}
