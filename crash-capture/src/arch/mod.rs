//! Architecture-specific collaborators: reading the current stack-pointer
//! register and the secondary fault-status registers. Every other module
//! in this crate is portable; this is the narrow seam where target
//! knowledge lives, confined to `arch/<isa>/` the way most bare-metal
//! kernels keep their register access.

#[cfg(feature = "arch-cortex-m")]
mod cortex_m;
#[cfg(feature = "arch-cortex-m")]
pub use cortex_m::current_sp;
#[cfg(all(feature = "arch-cortex-m", feature = "hw-registers"))]
pub use cortex_m::{fault_status_registers, register_file_from_exception_frame};

#[cfg(all(feature = "arch-riscv", not(feature = "arch-cortex-m")))]
mod riscv;
#[cfg(all(feature = "arch-riscv", not(feature = "arch-cortex-m")))]
pub use riscv::current_sp;
#[cfg(all(feature = "arch-riscv", not(feature = "arch-cortex-m"), feature = "hw-registers"))]
pub use riscv::{fault_status_registers, register_file_from_exception_frame};

#[cfg(not(any(feature = "arch-cortex-m", feature = "arch-riscv")))]
mod host;
#[cfg(not(any(feature = "arch-cortex-m", feature = "arch-riscv")))]
pub use host::current_sp;
#[cfg(all(not(any(feature = "arch-cortex-m", feature = "arch-riscv")), feature = "hw-registers"))]
pub use host::{fault_status_registers, register_file_from_exception_frame};
