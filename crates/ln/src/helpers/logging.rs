use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;

use crate::errors::LnError;
use crate::level::Priority;

/// Installs a `tracing` fmt subscriber for desktop hosts, so records sent
/// through [`crate::TracingSink`] show up on stderr.
pub fn init_host_tracing(min_level: Priority) -> Result<(), LnError> {
    tracing::subscriber::set_global_default(host_subscriber(min_level, std::io::stderr))
        .map_err(|e| LnError::Subscriber(e.to_string()))
}

pub(crate) fn host_subscriber<W>(min_level: Priority, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(min_level.to_tracing_level())
        .with_writer(writer)
        .with_ansi(false)
        .without_time()
        .finish()
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{ln_args, Ln, TracingSink};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn tracing_sink_events_carry_level_and_tag() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = host_subscriber(Priority::Info, move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            let ln = Ln::new(Arc::new(TracingSink)).tagged("Renderer");
            ln.set_log_level(Priority::Verbose);
            ln.d("below the subscriber level", &[]).unwrap();
            ln.w("frame took %dms", ln_args!(40)).unwrap();
            ln.wtf("device lost", &[]).unwrap();
        });

        let lines = captured.lines();
        assert_eq!(lines.len(), 2, "{lines:?}");
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].contains("tag=") && lines[0].contains("Renderer"));
        assert!(lines[0].contains("frame took 40ms"));
        assert!(lines[1].contains("ERROR"));
        assert!(lines[1].contains("assert=true"));
        assert!(lines[1].contains("device lost"));
    }
}
