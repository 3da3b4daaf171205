//! Dropdown Widget Example
//!
//! Walks the three demo dropdowns through a short scripted session and
//! prints the page after every step.

use std::time::Duration;

use selecta_ui::demos::{DemoSettings, DemoSlot, DropdownDemo, DropdownMessage};
use selecta_ui::TextRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut demo = DropdownDemo::new(DemoSettings {
        search_delay: Duration::from_millis(300),
        ..DemoSettings::default()
    })?;
    let renderer = TextRenderer::new();

    let script = [
        DropdownMessage::Click(DemoSlot::Plain),
        DropdownMessage::Search(DemoSlot::Plain, "2".to_string()),
        DropdownMessage::Pick(DemoSlot::Plain, "option2".to_string()),
        DropdownMessage::Click(DemoSlot::Async),
        DropdownMessage::Search(DemoSlot::Async, "opt".to_string()),
        DropdownMessage::Focus(DemoSlot::Custom),
        DropdownMessage::Pick(DemoSlot::Custom, "option3".to_string()),
    ];

    for message in script {
        println!(">>> {:?}", message);
        demo.update(message);
        println!("{}", demo.render(&renderer));
    }

    println!(">>> waiting for {} search(es)", demo.pending_searches());
    demo.settle();
    demo.update(DropdownMessage::Click(DemoSlot::Async));
    println!("{}", demo.render(&renderer));

    Ok(())
}
