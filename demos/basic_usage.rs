//! Basic usage example for foodframe-rs
//!
//! Walks one activation of the frame with in-memory collaborators:
//! detection, typing a city, rotating, and the map link.

use async_trait::async_trait;
use foodframe_core::prelude::*;

struct DemoHost;

#[async_trait(?Send)]
impl HostContext for DemoHost {
    async fn context(&self) -> Result<Option<FrameContext>> {
        Ok(Some(FrameContext::with_username("kompreni")))
    }
}

fn print_card(frame: &WidgetController<MemoryStore, UrlLog>) {
    match frame.view() {
        FrameView::Loading => println!("  Loading..."),
        FrameView::Card(card) => {
            println!("  {}", card.description);
            if let Some(rec) = card.recommendation {
                println!("  {} @ {} - {}", rec.name, rec.place, rec.description);
            }
            if let Some(prompt) = card.detected_prompt {
                println!("  {prompt}");
            }
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    println!("=== foodframe basic usage ===\n");

    let mut frame = WidgetController::new(MemoryStore::new(), UrlLog::default());
    print_card(&frame);

    println!("\n--- Ready, detecting city ---");
    if let Some(task) = frame.on_ready() {
        let detected = task.run(&DemoHost).await;
        println!("  detected: {detected:?}");
    }
    print_card(&frame);

    println!("\n--- Use detected location ---");
    frame.use_detected_city();
    print_card(&frame);
    for _ in 0..3 {
        frame.next_recommendation();
        print_card(&frame);
    }

    println!("\n--- Typed city ---");
    frame.type_city("Tokyo");
    frame.request_recommendations();
    print_card(&frame);
    println!(
        "  persisted: {:?}",
        frame.store().and_then(|s| s.peek("userCity"))
    );

    println!("\n--- View on map ---");
    if let Some(url) = frame.view_on_map() {
        println!("  {url}");
    }

    println!("\n--- Table ---");
    let table = RecommendationTable::builtin();
    for (city, list) in table.cities() {
        println!("  {city}: {}", list.len());
    }
    println!("  unknown city -> {}", table.resolve_list("Lisbon")[0].name);

    Ok(())
}
