/*!
 * Command-line interface for promptclip
 */

use clap::Parser;

use promptclip::config::{Args, Config, Sink};
use promptclip::report::{PromptReport, Reporter};
use promptclip::{Assembler, Result};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let args = Args::parse();

    let config = Config::from_args(args)?;

    // Echo the computed root even when it turns out to be invalid.
    // Stdout stays clean when it carries the prompt itself
    match config.sink {
        Sink::Stdout => eprintln!("root_path={}", config.root.display()),
        Sink::Clipboard => println!("root_path={}", config.root.display()),
    }

    config.validate()?;

    let sink = config.sink.clipboard();
    let assembler = Assembler::new(&config.root);
    let prompt = assembler.assemble_and_publish(config.files, sink.as_ref())?;

    if let Some(format) = config.report {
        let report = PromptReport::from_prompt(&prompt, sink.name());
        Reporter::new(format).print_report(&report)?;
    }

    Ok(())
}
