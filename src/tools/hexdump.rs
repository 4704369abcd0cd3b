const BYTES_PER_LINE: usize = 16;

/// Render bytes 16 to a line as `offset: hex  ascii`. Non-printable bytes show as '.'.
pub fn hexdump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4 + 16);
    for (line, chunk) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        out.push_str(&format!("{:06x}: ", line * BYTES_PER_LINE));
        for i in 0..BYTES_PER_LINE {
            match chunk.get(i) {
                Some(byte) => out.push_str(&format!("{:02x} ", byte)),
                None => out.push_str("   "),
            }
        }
        out.push(' ');
        chunk.iter().for_each(|&b| {
            out.push(if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            })
        });
        out.push('\n');
    }
    out
}

#[test]
fn hexdump_test() {
    let dump = hexdump(b"Hi\x00");
    assert_eq!(dump, format!("000000: 48 69 00 {} Hi.\n", "   ".repeat(13)));
}

#[test]
fn hexdump_lines_test() {
    let data = (0..20_u8).map(|b| b + b'A').collect::<Vec<u8>>();
    let dump = hexdump(&data);
    let lines = dump.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" ABCDEFGHIJKLMNOP"));
    assert!(lines[1].starts_with("000010: 51 52 53 54 "));
    assert!(hexdump(&[]).is_empty());
}
