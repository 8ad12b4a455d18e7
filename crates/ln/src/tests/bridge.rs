#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use log::{Level, Log, Record};

    use crate::tests::RecordingSink;
    use crate::{init_logger, Ln, LnError, LnLogger, LogCrateSink, Priority, TracingSink};

    fn setup() -> (Ln, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        (Ln::new(sink.clone()), sink)
    }

    #[test]
    fn enabled_follows_the_shared_threshold() {
        let (ln, _sink) = setup();
        let logger = LnLogger::new(ln.clone());
        let debug = log::Metadata::builder().level(Level::Debug).build();

        assert!(logger.enabled(&debug));
        ln.set_log_level(Priority::Info);
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn records_carry_file_and_line_tags() {
        let (ln, sink) = setup();
        let logger = LnLogger::new(ln);

        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("net")
                .file(Some("src/net/client.rs"))
                .line(Some(88))
                .args(format_args!("timeout after {}ms", 250))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Trace)
                .target("net")
                .args(format_args!("below threshold"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("net")
                .args(format_args!("no location"))
                .build(),
        );

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].priority, Priority::Warn);
        assert_eq!(records[0].tag, "client.rs:88");
        assert_eq!(records[0].message, "timeout after 250ms");
        assert_eq!(records[1].tag, "net");
    }

    #[test]
    fn fixed_tags_win_over_record_locations() {
        let (ln, sink) = setup();
        let logger = LnLogger::new(ln.tagged("Net"));

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .file(Some("src/net/client.rs"))
                .line(Some(3))
                .args(format_args!("connected"))
                .build(),
        );

        assert_eq!(sink.records()[0].tag, "Net");
    }

    #[test]
    fn sinks_that_feed_log_are_refused() {
        let result = init_logger(Ln::new(Arc::new(LogCrateSink)));
        assert!(matches!(result, Err(LnError::RecursiveSink)));

        let result = init_logger(Ln::new(Arc::new(TracingSink)));
        assert!(matches!(result, Err(LnError::RecursiveSink)));
    }
}
