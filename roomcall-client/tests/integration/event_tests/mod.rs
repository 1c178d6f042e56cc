mod test_stale_events_dropped;
