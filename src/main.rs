use anyhow::{Context, Result};

use armscript::config::Config;
use armscript::interpreter::Interpreter;
use armscript::render::{self, OutputFormat};

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.clone()),
    )
    .init();

    let source = std::fs::read_to_string(&config.script)
        .with_context(|| format!("reading script '{}'", config.script.display()))?;

    let interpreter = Interpreter::new()?;

    if config.show_tokens {
        let mut tokens = Vec::new();
        for line in source.lines() {
            match interpreter.tokenize(line) {
                Ok(line_tokens) => tokens.extend(line_tokens),
                Err(err) => log::debug!("token table skips unlexable line: {err}"),
            }
        }
        let colored = config.format == OutputFormat::Ansi;
        println!(
            "{}\n",
            render::token_table(&tokens, interpreter.vocabulary(), colored)
        );
    }

    let log = interpreter.run(&source);
    let rendered = render::render_log(&log, config.format);
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    Ok(())
}
