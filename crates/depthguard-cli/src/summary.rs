use std::path::Path;

use console::Style;
use depthguard_core::pipeline::{FilterConfig, FilterOutput};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_filter_summary(config: &FilterConfig, output_dir: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Depth Filter"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output_dir.display())
    );

    if !config.enabled {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Filtering"),
            s.disabled.apply_to("disabled (passthrough)")
        );
        println!();
        return;
    }
    println!();

    println!("  {}", s.header.apply_to("Edge Mask"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Kernel"),
        s.value.apply_to(format!(
            "{0}x{0} Laplacian",
            config.laplace_kernel_size
        ))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(config.filter_threshold)
    );
    println!(
        "    {:<14}{} {}",
        s.label.apply_to("Dilate"),
        s.method.apply_to(config.struct_shape),
        s.value.apply_to(format!("{0}x{0}", config.dilate_struct_size))
    );
    println!();

    if config.similarity_enabled {
        println!("  {}", s.header.apply_to("Similarity Rescue"));
        println!(
            "    {:<14}{}",
            s.label.apply_to("Distance"),
            s.value.apply_to(format!("< {}", config.distance_threshold))
        );
        println!(
            "    {:<14}{}",
            s.label.apply_to("Neighbors"),
            s.value
                .apply_to(format!("> {} of 8", config.similar_count_threshold))
        );
    } else {
        println!(
            "  {:<14}{}",
            s.header.apply_to("Similarity Rescue"),
            s.disabled.apply_to("disabled")
        );
    }
    println!();
}

pub fn print_frame_result(path: &Path, output: &FilterOutput) {
    let s = Styles::new();
    let frame = output.frame();
    let dims = format!("{}x{}", frame.width(), frame.height());

    match output.stats() {
        Some(stats) => println!(
            "  {}  {:<10} discarded {} ({:.1}%), rescued {}",
            s.path.apply_to(path.display()),
            s.label.apply_to(dims),
            s.value.apply_to(stats.discarded),
            stats.discarded_fraction() * 100.0,
            s.value.apply_to(stats.rescued)
        ),
        None => println!(
            "  {}  {:<10} {}",
            s.path.apply_to(path.display()),
            s.label.apply_to(dims),
            s.disabled.apply_to("passthrough")
        ),
    }
}
