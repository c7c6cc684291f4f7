pub fn config_export() {
    print!("{}", initials_core::config::default_toml());
}

pub fn config_show() {
    let cfg = initials_core::config::config();
    let layout = &cfg.layout;
    println!(
        "table: U+{:04X}..U+{:04X} ({} code points), {} letters per segment, {} segments",
        layout.start,
        layout.start + layout.count - 1,
        layout.count,
        layout.chunk,
        layout.segment_count()
    );
    println!("overrides: {}", cfg.overrides.len());
    for (c, letter) in cfg.overrides.iter() {
        println!("  {c}\tU+{:04X}\t{letter}", c as u32);
    }
}
