//! Text report builder. Field order and labels here are this crate's own
//! convention, not a normative wire format.
//!
//! Written against `core::fmt::Write` rather than producing a `String` so
//! it can be handed a UART writer on-target with no allocation; the host
//! tools format it into a `String` the same way `crash-capture-sim` does
//! in its own tests.

use core::fmt::{self, Write};

use crate::record::{DumpRecord, FaultKind};

/// Writes the human-readable crash report for `record` to `out`.
///
/// Caller's responsibility: `record` should have been confirmed valid via
/// [`crate::export::is_saved_in`] (or equivalent) first. Called against an
/// invalid record this still produces output, just with whatever
/// unspecified contents the fields happen to hold.
pub fn write_report<W: Write>(out: &mut W, record: &DumpRecord) -> fmt::Result {
    writeln!(out, "Crash Capture Report")?;

    let fault_kind = match record.fault_kind() {
        Some(FaultKind::SoftwareAssertion) => "Software Assertion",
        Some(FaultKind::HardwareException) => "Hardware Exception",
        None => "Unknown",
    };
    writeln!(out, "Fault kind:       {fault_kind}")?;
    writeln!(out, "File:             {}", record.file_name())?;
    writeln!(out, "Line:             {}", record.line_number())?;
    writeln!(out, "Auxiliary code:   {0} (0x{0:08x})", record.aux_code())?;
    writeln!(out, "Software version: {0} (0x{0:08x})", record.software_version())?;

    #[cfg(feature = "hw-registers")]
    {
        let regs = record.cpu_registers();
        writeln!(out, "Registers:")?;
        for (name, value) in [
            ("r0", regs.r0),
            ("r1", regs.r1),
            ("r2", regs.r2),
            ("r3", regs.r3),
            ("r12", regs.r12),
            ("lr", regs.lr),
            ("pc", regs.pc),
            ("xpsr", regs.xpsr),
        ] {
            writeln!(out, "  {name:<4}: 0x{value:08x}")?;
        }
        for (i, status) in record.fault_status_registers().iter().enumerate() {
            writeln!(out, "  fault_status[{i}]: 0x{status:08x}")?;
        }
    }

    for (i, addr) in record.active_backtrace().iter().enumerate() {
        writeln!(out, "Stack {i}:          0x{addr:08x}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_contains_expected_labels() {
        let mut record = DumpRecord::cleared();
        record.mark_valid();
        crate::record::write_file_name(&mut record.file_name, Some("src/main.c"));
        record.line_number = 77;
        record.aux_code = 3;
        record.fault_kind = FaultKind::SoftwareAssertion.as_raw();
        record.active_backtrace[0] = 0x0040_0100;

        let mut buf = heapless_like_buffer();
        write_report(&mut buf, &record).unwrap();
        let text = buf.as_str();

        assert!(text.contains("Crash Capture Report"));
        assert!(text.contains("Software Assertion"));
        assert!(text.contains("src/main.c"));
        assert!(text.contains("Line:             77"));
        assert!(text.contains("Stack 0:"));
        assert!(text.contains("0x00400100"));
    }

    /// Minimal fixed-capacity `core::fmt::Write` sink so this test doesn't
    /// need `alloc`.
    struct FixedBuf {
        buf: [u8; 2048],
        len: usize,
    }

    impl FixedBuf {
        fn as_str(&self) -> &str {
            core::str::from_utf8(&self.buf[..self.len]).unwrap()
        }
    }

    impl Write for FixedBuf {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            let bytes = s.as_bytes();
            let end = self.len + bytes.len();
            if end > self.buf.len() {
                return Err(fmt::Error);
            }
            self.buf[self.len..end].copy_from_slice(bytes);
            self.len = end;
            Ok(())
        }
    }

    fn heapless_like_buffer() -> FixedBuf {
        FixedBuf { buf: [0; 2048], len: 0 }
    }
}
