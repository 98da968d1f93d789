//! Board memory maps. Exactly one of these wins at compile time; see the
//! crate's `board-*` features. The fallback (`host`) is wide enough to back
//! the synthetic RAM/stack buffers used by `crash-capture-sim` and by this
//! crate's own integration tests.

#[cfg(feature = "board-cortex-m-generic")]
mod cortex_m_generic;
#[cfg(feature = "board-cortex-m-generic")]
pub use cortex_m_generic::*;

#[cfg(all(
    feature = "board-qemu-virt-riscv",
    not(feature = "board-cortex-m-generic")
))]
mod qemu_virt_riscv;
#[cfg(all(
    feature = "board-qemu-virt-riscv",
    not(feature = "board-cortex-m-generic")
))]
pub use qemu_virt_riscv::*;

#[cfg(not(any(
    feature = "board-cortex-m-generic",
    feature = "board-qemu-virt-riscv"
)))]
mod host;
#[cfg(not(any(
    feature = "board-cortex-m-generic",
    feature = "board-qemu-virt-riscv"
)))]
pub use host::*;
