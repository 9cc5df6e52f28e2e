use crate::emitter::{EmitContext, EmitResult, Emitter};
use crate::report::FunctionReportEmitter;
use anyhow::anyhow;
use phiscope_ir::Function;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Shared output sink for hosts that compile functions concurrently.
///
/// The lock is taken once per report, so two functions' block and statement sequences
/// can never interleave in the output. Within one report the writer is held exclusively.
pub struct SharedSink<W: Write> {
    inner: Arc<Mutex<W>>,
}

impl<W: Write> SharedSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    pub fn emit_function(&self, function: &Function) -> EmitResult {
        let mut writer = self
            .inner
            .lock()
            .map_err(|_| anyhow!("output sink poisoned"))?;
        FunctionReportEmitter::new().emit(function, &mut *writer, &mut EmitContext::new())
    }

    /// Recovers the writer once every clone of the sink is gone.
    pub fn into_inner(self) -> Option<W> {
        Arc::try_unwrap(self.inner)
            .ok()
            .and_then(|mutex| mutex.into_inner().ok())
    }
}

impl<W: Write> Clone for SharedSink<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
