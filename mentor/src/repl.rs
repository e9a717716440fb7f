//! The read-print session loop.
//!
//! Owns all terminal I/O: the welcome banner, the name prompt, exit-word
//! detection, `#` meta commands, and the separator-ruled printing of every
//! reply. Every other line goes to the engine, one turn at a time.

use mentor_core::{MentorSession, SessionConfig, SessionError};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Words that end the session, matched case-insensitively against the
/// whole line.
const EXIT_WORDS: &[&str] = &["sair", "exit", "tchau", "fim"];

const SEPARATOR: &str = "---------------------------------------------";

/// Shell configuration from command line flags.
#[derive(Debug, Clone, Default)]
pub struct ShellConfig {
    /// Display name; skips the interactive name prompt.
    pub user_name: Option<String>,
    /// JSON catalog to load instead of the built-in journeys.
    pub catalog: Option<PathBuf>,
}

/// Parse shell configuration from command line arguments.
pub fn parse_config_from_args(args: &[String]) -> ShellConfig {
    let mut config = ShellConfig::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--nome" => {
                if let Some(name) = args.get(i + 1) {
                    config.user_name = Some(name.clone());
                    i += 1;
                }
            }
            "--topicos" => {
                if let Some(path) = args.get(i + 1) {
                    config.catalog = Some(PathBuf::from(path));
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    config
}

/// Run the interactive session until an exit word or end of input.
pub fn run(config: ShellConfig) -> Result<(), SessionError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_banner();

    let user_name = match config.user_name.as_deref() {
        Some(name) => capitalize(name.trim()),
        None => match prompt_name(&mut lines) {
            Some(name) => name,
            // End of input before we even had a name.
            None => return Ok(()),
        },
    };

    let mut session_config = SessionConfig::new(user_name);
    if let Some(path) = config.catalog {
        session_config = session_config.with_catalog_file(path);
    }
    let mut session = MentorSession::new(session_config)?;

    println!();
    println!("{}", session.greet());

    loop {
        print!("\n{}: ", session.user_name());
        io::stdout().flush().ok();

        let Some(line) = lines.next() else {
            println!();
            println!(
                "\nMentor: Sessão encerrada. Até logo, {}!",
                session.user_name()
            );
            break;
        };
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Erro ao ler entrada: {e}");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if EXIT_WORDS.contains(&line.to_lowercase().as_str()) {
            println!(
                "\nMentor: Até a próxima, {}! Lembre-se que o progresso é diário. ✨",
                session.user_name()
            );
            break;
        }

        if let Some(command) = line.strip_prefix('#') {
            handle_command(command, &session);
            continue;
        }

        let reply = session.process_turn(line);
        println!("\n{SEPARATOR}");
        println!("Mentor: {}", reply.text);
        println!("{SEPARATOR}");
    }

    Ok(())
}

/// Ask for the user's display name; `None` means input ended first.
fn prompt_name<B: BufRead>(lines: &mut io::Lines<B>) -> Option<String> {
    loop {
        print!("Para começarmos, como gostaria de ser chamado? ");
        io::stdout().flush().ok();

        let line = lines.next()?.ok()?;
        let name = line.trim();
        if !name.is_empty() {
            return Some(capitalize(name));
        }
    }
}

fn handle_command(command: &str, session: &MentorSession) {
    match command.trim().to_lowercase().as_str() {
        "status" => {
            println!("[STATUS]");
            println!("  Usuário: {}", session.user_name());
            match session.active_topic() {
                Some(topic) => println!("  Tópico atual: {topic}"),
                None => println!("  Tópico atual: nenhum"),
            }
            for row in session.progress_summary() {
                let mark = if row.is_complete { " (concluído)" } else { "" };
                println!(
                    "  {}: {}/{}{}",
                    row.topic, row.completed_steps, row.total_steps, mark
                );
            }
            println!("  Interações: {}", session.turn_count());
        }
        "topicos" | "tópicos" => {
            println!("[TÓPICOS]");
            for name in session.knowledge().topic_names() {
                println!("  {name}");
            }
        }
        "ajuda" | "help" => {
            println!("[AJUDA]");
            println!("  #status    - Progresso das jornadas");
            println!("  #topicos   - Lista os tópicos disponíveis");
            println!("  #ajuda     - Mostra esta lista");
            println!("  sair       - Encerra a sessão");
            println!("  (qualquer outra linha vai para o mentor)");
        }
        _ => {
            println!("[ERRO] Comando desconhecido. Digite #ajuda para ver os comandos.");
        }
    }
}

fn print_banner() {
    println!("{}", "=".repeat(60));
    println!("🤖 Bem-vindo ao Mentor - Sua Jornada de Desenvolvimento 🚀");
    println!("{}", "=".repeat(60));
}

/// First letter uppercase, rest lowercase.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
