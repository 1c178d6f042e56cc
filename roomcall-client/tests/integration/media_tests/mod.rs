mod test_toggle_during_capture;
