use std::path::Path;

use console::Style;
use multithresh_core::multithresh::ThresholdResult;
use multithresh_core::{Image, ThresholdConfig};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_thresh_summary(file: &Path, image: &Image, config: &ThresholdConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Multi-level Otsu"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Input"), s.path.apply_to(file.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!(
            "{}x{} ({} channel{})",
            image.width(),
            image.height(),
            image.channels(),
            if image.channels() == 1 { "" } else { "s" }
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Thresholds"),
        s.value.apply_to(format!("{} ({} classes)", config.thresholds, config.classes()))
    );
    println!("  {:<14}{}", s.label.apply_to("Levels"), s.value.apply_to(config.levels));
    println!("  {:<14}{}", s.label.apply_to("Search"), s.method.apply_to(config.search));
    println!();
}

pub fn print_thresh_result(result: &ThresholdResult) {
    let s = Styles::new();

    let list = result
        .thresholds
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    println!();
    println!("  {:<14}{}", s.label.apply_to("Result"), s.value.apply_to(list));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Variance"),
        s.value.apply_to(format!("{:.4}", result.between_class_variance))
    );
    println!();
}
