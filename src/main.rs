/*!
 * blockmem - Memory Space Simulation
 *
 * Runs a short allocate / free / defragment scenario against a simulated
 * memory space and logs the state of its block lists after each phase.
 *
 * Environment variables:
 * - BLOCKMEM_CAPACITY: size of the memory space in bytes (default: 64KB)
 * - BLOCKMEM_TRACE_JSON: JSON log output when `1` or `true`
 * - RUST_LOG: log filter (default: info)
 */

use block_list::core::limits::{DEMO_ALLOCATIONS, DEMO_FREES};
use block_list::memory::{MemoryInfo, MemoryPressure};
use block_list::monitoring::span_operation;
use block_list::{init_tracing, MemorySpace, SimulationConfig};
use tracing::{info, warn};

fn main() -> miette::Result<()> {
    init_tracing(SimulationConfig::trace_json_from_env());

    let config = SimulationConfig::from_env();
    info!(capacity = config.capacity, "blockmem starting");

    let mut space = MemorySpace::new(config.capacity);

    let addresses = {
        let _span = span_operation("malloc").entered();
        let addresses = DEMO_ALLOCATIONS
            .iter()
            .map(|&length| space.malloc(length))
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            free = %space.free_list(),
            allocated = %space.allocated_list(),
            "Allocation phase complete"
        );
        addresses
    };

    {
        let _span = span_operation("free").entered();
        for address in DEMO_FREES.iter().filter_map(|&i| addresses.get(i)) {
            space.free(*address)?;
        }
        info!(
            free = %space.free_list(),
            allocated = %space.allocated_list(),
            "Free phase complete"
        );
    }

    {
        let _span = span_operation("defrag").entered();
        let merges = space.defrag()?;
        info!(
            merges,
            free = %space.free_list(),
            allocated = %space.allocated_list(),
            "Defrag phase complete"
        );
    }

    let stats = space.stats();
    match space.pressure() {
        MemoryPressure::Low => info!(
            used = stats.allocated_bytes,
            capacity = stats.capacity,
            fragments = stats.fragmented_blocks(),
            "Simulation finished"
        ),
        level => warn!(
            %level,
            used = stats.allocated_bytes,
            capacity = stats.capacity,
            "Simulation finished under memory pressure"
        ),
    }

    println!("{}", space);
    Ok(())
}
