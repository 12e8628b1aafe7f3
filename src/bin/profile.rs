use std::time::Instant;

use dungen::generators::{DungeonGenerator, Style, get_rng};

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1000);

    let generator = DungeonGenerator::default();
    let mut rng = get_rng(None);
    for style in Style::ALL {
        let start = Instant::now();
        let fallbacks = (0..num_iters)
            .filter(|_| generator.generate(style, &mut rng).is_fallback())
            .count();
        let elapsed = start.elapsed();
        if fallbacks > 0 {
            tracing::warn!("[profile] {} fell back {} times", style, fallbacks);
        }
        println!(
            "{style:>8}: {num_iters} layouts in {elapsed:?} ({:?}/layout), {fallbacks} fallbacks",
            elapsed / num_iters.max(1) as u32
        );
    }
    Ok(())
}
