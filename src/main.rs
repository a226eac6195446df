//! termfolio command-line front end.
//!
//! Renders a [`Shell`] session on stdout and reads commands from stdin.
//!
//! ```text
//! termfolio                          # interactive session
//! termfolio -c ls -c "cat skills.txt" # run commands and exit
//! termfolio --instant --no-banner    # no pacing, no welcome text
//! ```

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::io::{self, BufRead, Write};
    use std::path::PathBuf;
    use std::sync::Arc;

    use anyhow::Context;
    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use termfolio::config::{APP_NAME, ShellConfig, WELCOME_BANNER};
    use termfolio::core::{Command, Shell, StreamStep, Submission, VirtualFs};
    use termfolio::models::Entry;

    /// Clear screen and move the cursor home.
    const ANSI_CLEAR: &str = "\x1b[2J\x1b[H";

    #[derive(Parser, Debug)]
    #[command(name = APP_NAME, version, about = "A portfolio terminal")]
    struct Args {
        /// Configuration file (TOML)
        #[arg(long, default_value = "termfolio.toml")]
        config: PathBuf,

        /// Filesystem manifest (JSON), overrides the configured one
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Delay between streamed lines in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Reveal streamed output without waiting between lines
        #[arg(long)]
        instant: bool,

        /// Skip the welcome banner
        #[arg(long)]
        no_banner: bool,

        /// Run a command and exit (repeatable)
        #[arg(short = 'c', long = "command")]
        commands: Vec<String>,
    }

    impl Args {
        /// Layer command-line overrides on top of the file configuration.
        fn apply(&self, config: &mut ShellConfig) {
            if let Some(manifest) = &self.manifest {
                config.filesystem.manifest = Some(manifest.clone());
            }
            if let Some(ms) = self.delay_ms {
                config.animation.line_delay_ms = ms;
            }
            if self.instant {
                config.animation.enabled = false;
            }
        }
    }

    pub async fn run() -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(io::stderr)
            .init();

        let args = Args::parse();
        let mut config = ShellConfig::load(&args.config)
            .with_context(|| format!("loading {}", args.config.display()))?;
        args.apply(&mut config);

        let fs = load_filesystem(&config)?;
        let mut shell = Shell::new(Arc::new(fs), config.line_delay()).with_prompt(config.prompt);
        let mut stdout = io::stdout();

        if !args.no_banner {
            write!(stdout, "{}", WELCOME_BANNER)?;
        }

        if !args.commands.is_empty() {
            run_batch(&mut shell, &args.commands, &mut stdout).await?;
            return Ok(());
        }

        let stdin = io::stdin();
        let mut input = String::new();
        loop {
            write!(stdout, "{} ", shell.prompt())?;
            stdout.flush()?;

            input.clear();
            if stdin.lock().read_line(&mut input)? == 0 {
                writeln!(stdout)?;
                break;
            }
            let line = input.trim_end_matches(['\r', '\n']);
            execute(&mut shell, line, &mut stdout).await?;
        }
        Ok(())
    }

    fn load_filesystem(config: &ShellConfig) -> anyhow::Result<VirtualFs> {
        match &config.filesystem.manifest {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading manifest {}", path.display()))?;
                VirtualFs::from_json(&json)
                    .with_context(|| format!("building filesystem from {}", path.display()))
            }
            None => VirtualFs::builtin().context("building built-in filesystem"),
        }
    }

    /// Echo and execute each `-c` command in order.
    async fn run_batch<W: Write>(
        shell: &mut Shell,
        commands: &[String],
        out: &mut W,
    ) -> io::Result<()> {
        for command in commands {
            writeln!(out, "{} {}", shell.prompt(), command)?;
            execute(shell, command, out).await?;
        }
        Ok(())
    }

    /// Submit one line and render whatever it produced.
    ///
    /// A failed write while streaming stops further output but the stream
    /// still runs to completion, so the session is idle when this returns.
    async fn execute<W: Write>(shell: &mut Shell, line: &str, out: &mut W) -> io::Result<()> {
        match shell.submit(line) {
            Submission::Rejected => {}
            Submission::Silent => {
                if Command::parse(line) == Command::Clear {
                    write!(out, "{}", ANSI_CLEAR)?;
                }
            }
            Submission::Recorded => {
                if let Some(Entry::Output { lines, .. }) = shell.history().last() {
                    for l in lines {
                        writeln!(out, "{}", l)?;
                    }
                }
            }
            Submission::Streaming { .. } => {
                let mut failed: Option<io::Error> = None;
                shell
                    .run_stream(|step| {
                        if failed.is_some() {
                            return;
                        }
                        if let StreamStep::Revealed(l) = step {
                            if let Err(e) = writeln!(out, "{}", l).and_then(|()| out.flush()) {
                                failed = Some(e);
                            }
                        }
                    })
                    .await;
                if let Some(e) = failed {
                    return Err(e);
                }
            }
        }
        out.flush()
    }

}
