// Lance - partida do motor contra si próprio (ou contra lances aleatórios)
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lance::engine::DEFAULT_TT_CAPACITY;
use lance::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// O motor joga os dois lados
    Engine,
    /// O segundo lado joga lances aleatórios
    Random,
}

#[derive(Parser)]
#[command(name = "lance")]
#[command(about = "Minimax alpha-beta self-play on a chess board")]
struct Cli {
    /// Posição inicial: "<placement> [w|b] [depth]" (cor do jogador humano)
    #[arg(short, long)]
    fen: Option<String>,

    /// Profundidade máxima; por omissão usa a do tabuleiro
    #[arg(short, long)]
    depth: Option<u8>,

    /// Número de meios-lances a jogar
    #[arg(short, long, default_value_t = 10)]
    plies: u32,

    /// Semente do gerador aleatório
    #[arg(short, long)]
    seed: Option<u64>,

    /// Capacidade da tabela de transposição
    #[arg(long, default_value_t = DEFAULT_TT_CAPACITY)]
    tt_capacity: usize,

    /// Escreve o dump da árvore de busca neste ficheiro
    #[arg(long)]
    log_tree: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Opponent::Engine)]
    opponent: Opponent,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut board = match cli.fen.as_deref() {
        Some(fen) => Board::from_fen(fen).with_context(|| format!("cannot load position {fen:?}"))?,
        None => Board::new(),
    };
    board.log = cli.log_tree.is_some();

    let mut config = EngineConfig::default()
        .with_tt_capacity(cli.tt_capacity)
        .with_tree_log_path(cli.log_tree.clone());
    if let Some(depth) = cli.depth {
        config = config.with_depth(depth);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let mut engine = Engine::new(config);

    println!("{board}");

    for ply in 0..cli.plies {
        let mover = board.engine_color();
        let random_side = cli.opponent == Opponent::Random && ply % 2 == 1;

        let moved = if random_side {
            engine.get_random_move(&mut board)
        } else {
            engine.get_ai_move(&mut board)
        };

        if !moved {
            info!(ply, ?mover, "no move available, game over");
            break;
        }

        let stats = engine.stats();
        println!("ply {} ({:?}): nodes {} | depth {} | cache hits {}", ply + 1, mover, stats.nodes, stats.depth, stats.cache_hits);
        println!("{board}");

        // O lado que acabou de jogar passa a ser o "jogador"; o motor muda de cor
        board.player_color = !board.player_color;
    }

    let tt = engine.cache();
    info!(entries = tt.len(), hit_rate = tt.hit_rate(), "transposition table");
    Ok(())
}
