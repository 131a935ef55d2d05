//! # Teahouse Counter Entry Point
//!
//! ```bash
//! echo 奶茶 | cargo run -p teahouse-counter
//! # 總價: 40
//! ```
//!
//! The actual setup is in lib.rs for better testability.

fn main() -> anyhow::Result<()> {
    teahouse_counter::run()
}
