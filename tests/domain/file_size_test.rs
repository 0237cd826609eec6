use whisper_gateway::domain::megabytes;

#[test]
fn given_byte_counts_when_converting_then_uses_binary_megabytes() {
    assert_eq!(megabytes(10 * 1024 * 1024), 10.0);
    assert_eq!(format!("{:.2}", megabytes(15 * 1024 * 1024)), "15.00");
    assert_eq!(format!("{:.2}", megabytes(1_500_000)), "1.43");
    assert_eq!(megabytes(0), 0.0);
}
