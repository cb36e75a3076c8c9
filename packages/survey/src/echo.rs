//! ICMPv4 echo request/reply codec.
//!
//! The firmware sends these frames through a raw ICMP socket, which
//! expects the full ICMP packet including header and checksum. Keeping
//! the wire layout here means the reachability logic is host-tested.

pub const ECHO_HEADER_LEN: usize = 8;
pub const ECHO_PAYLOAD_MAX: usize = 64;
pub const ECHO_FRAME_MAX: usize = ECHO_HEADER_LEN + ECHO_PAYLOAD_MAX;

const TYPE_ECHO_REQUEST: u8 = 8;
const TYPE_ECHO_REPLY: u8 = 0;

/// Fills `frame` with an echo request for `ident`/`seq`, including the
/// internet checksum. `frame` must hold the header plus the payload; the
/// payload is a deterministic byte ramp.
pub fn encode_echo_request(frame: &mut [u8], ident: u16, seq: u16) {
    debug_assert!(frame.len() >= ECHO_HEADER_LEN);
    frame[0] = TYPE_ECHO_REQUEST;
    frame[1] = 0; // code
    frame[2] = 0; // checksum, folded in below
    frame[3] = 0;
    frame[4..6].copy_from_slice(&ident.to_be_bytes());
    frame[6..8].copy_from_slice(&seq.to_be_bytes());
    for (i, byte) in frame[ECHO_HEADER_LEN..].iter_mut().enumerate() {
        *byte = i as u8;
    }
    let sum = checksum(frame);
    frame[2..4].copy_from_slice(&sum.to_be_bytes());
}

/// RFC 1071 internet checksum. Over a frame with the checksum field
/// already filled in, the result is zero iff the frame is intact.
pub fn checksum(data: &[u8]) -> u16 {
    let mut sum = 0u32;
    let mut chunks = data.chunks_exact(2);
    for chunk in &mut chunks {
        sum += u32::from(u16::from_be_bytes([chunk[0], chunk[1]]));
    }
    if let [last] = chunks.remainder() {
        sum += u32::from(*last) << 8;
    }
    while sum > 0xFFFF {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    !(sum as u16)
}

/// True iff `frame` is an intact echo reply addressed to `ident`.
/// Sequence numbers are not matched; a late reply to an earlier probe
/// still proves reachability.
pub fn is_echo_reply(frame: &[u8], ident: u16) -> bool {
    frame.len() >= ECHO_HEADER_LEN
        && frame[0] == TYPE_ECHO_REPLY
        && frame[1] == 0
        && u16::from_be_bytes([frame[4], frame[5]]) == ident
        && checksum(frame) == 0
}
