// Advances three structurally different cursors and reports which tier ran.
// Run with `RUST_LOG=info cargo run --example advance_tiers`

use cursor_tiers::prelude::*;

fn report<C>(label: &str, cursor: &Counted<C>, tier: Tier) {
    let counts = cursor.counts();
    log::info!(
        "{label}: tier={tier:?} increments={} decrements={} offsets={}",
        counts.increments,
        counts.decrements,
        counts.offsets
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let values: Vec<i32> = (0..16).collect();
    let flist: ForwardList<i32> = values.iter().copied().collect();
    let list: List<i32> = values.iter().copied().collect();

    let mut forward = Counted::new(flist.begin());
    advance(&mut forward, 3);
    report("forward_list", &forward, tier_of::<ForwardListCursor<'_, i32>>());
    println!("forward_list +3 -> {}", forward.inner().try_get()?);

    let mut bidi = Counted::new(list.end());
    advance(&mut bidi, -2);
    report("list", &bidi, tier_of::<ListCursor<'_, i32>>());
    println!("list end-2 -> {}", bidi.inner().try_get()?);

    let mut random = Counted::new(SliceCursor::new(&values));
    advance(&mut random, 7);
    report("slice", &random, tier_of::<SliceCursor<'_, i32>>());
    println!("slice +7 -> {}", random.inner().try_get()?);

    println!(
        "{}",
        serde_json::to_string(&[forward.counts(), bidi.counts(), random.counts()])?
    );
    Ok(())
}
