use splaycache::harness::{self, HarnessConfig};
use splaycache::{fibonacci_lru, fibonacci_splay, Cache, LRUCache, SplayTree};
use std::time::Instant;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let n = 500;

    // Single cold run of each variant
    let mut memo = LRUCache::unbounded();
    let start = Instant::now();
    let result_lru = fibonacci_lru(n, &mut memo);
    let duration_lru = start.elapsed();
    println!("LRU Fibonacci({}) = {} (Time: {:?})", n, result_lru, duration_lru);

    let mut tree = SplayTree::new();
    let start = Instant::now();
    let result_splay = fibonacci_splay(n, &mut tree);
    let duration_splay = start.elapsed();
    println!("Splay Fibonacci({}) = {} (Time: {:?})", n, result_splay, duration_splay);

    assert_eq!(result_lru, result_splay);
    println!("Results are equal!");
    println!("LRU Stats: {:?}", memo.stats());
    println!("Splay Stats: {:?}", tree.stats());
    println!();

    // The LRU memo persists across the whole run while each n gets a new splay tree
    let report = harness::run(&HarnessConfig::default());
    print!("{}", report);

    Ok(())
}
