//! Interactive mentoring session shell.
//!
//! A line-oriented terminal interface around the mentoring dialogue engine:
//! read a line, hand it to the engine, print the reply, repeat until an
//! exit word or end of input.

mod repl;

use std::process;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    let config = repl::parse_config_from_args(&args);

    if let Err(e) = repl::run(config) {
        eprintln!("Erro: {e}");
        process::exit(1);
    }
}

fn print_help() {
    println!("mentor - jornadas de mentoria guiadas por texto");
    println!();
    println!("USO:");
    println!("  mentor [OPÇÕES]");
    println!();
    println!("OPÇÕES:");
    println!("  -h, --help         Mostra esta ajuda");
    println!("  --nome <NOME>      Nome de exibição (pula a pergunta inicial)");
    println!("  --topicos <PATH>   Carrega um catálogo JSON no lugar das jornadas embutidas");
    println!();
    println!("DURANTE A SESSÃO:");
    println!("  #status            Progresso das jornadas");
    println!("  #topicos           Lista os tópicos disponíveis");
    println!("  #ajuda             Mostra os comandos");
    println!("  sair               Encerra a sessão (também: exit, tchau, fim)");
    println!();
    println!("EXEMPLOS:");
    println!("  mentor                             # sessão interativa");
    println!("  mentor --nome Ana                  # sem pergunta de nome");
    println!("  mentor --topicos catalogo.json     # catálogo externo");
}
