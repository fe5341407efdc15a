use crate::config::InvokerConfig;
use crate::invoker::{failure_text, CompileInvoker};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the compiler binary
    #[arg(long, value_name = "PATH")]
    compiler: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile once without opening the editor window
    Compile {
        /// Source file to compile; reads stdin when neither this nor --code is given
        file: Option<PathBuf>,
        /// Source code as a string
        #[arg(long, conflicts_with = "file")]
        code: Option<String>,
        /// Emit a JSON record instead of plain display text
        #[arg(long)]
        json: bool,
    },
    /// Check that the compiler binary is present and runnable
    CheckCompiler,
}

pub fn run() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = InvokerConfig::default();
    if let Some(path) = cli.compiler {
        config.compiler_path = path;
    }

    match cli.command {
        None => crate::app::run_editor(config),
        Some(Commands::Compile { file, code, json }) => compile_once(config, file, code, json),
        Some(Commands::CheckCompiler) => check_compiler(&config),
    }
}

fn read_source(file: Option<PathBuf>, code: Option<String>) -> Result<String> {
    if let Some(code) = code {
        return Ok(code);
    }
    match file {
        Some(path) => Ok(std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn compile_once(
    config: InvokerConfig,
    file: Option<PathBuf>,
    code: Option<String>,
    json: bool,
) -> Result<()> {
    let source = read_source(file, code)?;
    let invoker = CompileInvoker::new(config)?;

    if !json {
        println!("{}", invoker.invoke(&source));
        return Ok(());
    }

    let record = match invoker.run_compiler(&source) {
        Ok(outcome) => serde_json::json!({
            "launched": true,
            "stdout": outcome.stdout,
            "stderr": outcome.stderr,
            "exit_code": outcome.exit_code,
            "truncated": outcome.truncated,
            "display": outcome.display_text(),
        }),
        Err(e) => serde_json::json!({
            "launched": false,
            "display": failure_text(&e),
        }),
    };
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn check_compiler(config: &InvokerConfig) -> Result<()> {
    let path = &config.compiler_path;
    if !path.is_file() {
        eprintln!("Compiler binary {} not found", path.display());
        eprintln!("Place the pscompiler binary there or pass --compiler <PATH>");
        std::process::exit(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(path)?.permissions().mode();
        if mode & 0o111 == 0 {
            eprintln!("Compiler binary {} is not executable", path.display());
            std::process::exit(1);
        }
    }

    println!("Compiler binary {} looks runnable", path.display());
    Ok(())
}
