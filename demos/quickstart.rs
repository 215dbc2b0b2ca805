//! Resolve the journal style and show what a plotting layer would read from it.

use plotdecor::display::{NoopDisplay, in_notebook};
use plotdecor::{ErrorBarStyle, StyleOptions};

fn main() {
    // A real notebook front-end would implement InlineDisplay; this demo has
    // none, so the retina request is dropped on the floor.
    let mut display = NoopDisplay;
    if in_notebook() {
        println!("running under a notebook kernel");
    }

    let rc = StyleOptions::new()
        .with_fontsize(12.0)
        .with_figsize((7.0, 5.0).into())
        .configure_with(&mut display);

    println!();
    println!("figure: {} at {} dpi (saved at {} dpi)", rc.figure.size, rc.figure.dpi, rc.savefig.dpi);
    for (idx, props) in rc.axes.prop_cycle.iter().take(4).enumerate() {
        println!("series {idx}: {} {}", props.color.html(), props.marker);
    }

    let eb = ErrorBarStyle::default().with_marker_size(4.0);
    println!(
        "error bars: {} pt markers, {} pt caps, opacity {}",
        eb.marker_size, eb.cap_size, eb.opacity
    );
}
