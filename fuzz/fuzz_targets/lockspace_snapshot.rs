#![no_main]

use std::io::Cursor;

use clusterlock::msr::lockspace_wire::decode_lockspace;
use clusterlock::wire::Decoder;
use libfuzzer_sys::fuzz_target;

// The slave-bootstrap snapshot decode is the one decode routine that takes
// its entire input straight from another node over the wire with no prior
// framing by an opcode dispatch, so it gets its own target.
fuzz_target!(|data: &[u8]| {
    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    rt.block_on(async {
        let mut dec = Decoder::new(Cursor::new(data));
        let _ = decode_lockspace(&mut dec).await;
    });
});
