#![no_main]

use std::io::Cursor;

use clusterlock::proto::{ActionReq, CbState, DropExpired, LoginReq, StateReq};
use clusterlock::wire::Decoder;
use libfuzzer_sys::fuzz_target;

// Feeds raw bytes to every message struct's decode, the way a peer
// connection would. Only a panic/hang is a bug: Err is the expected
// outcome for almost all inputs here.
fuzz_target!(|data: &[u8]| {
    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    rt.block_on(async {
        let mut dec = Decoder::new(Cursor::new(data));
        let _ = LoginReq::decode(&mut dec).await;

        let mut dec = Decoder::new(Cursor::new(data));
        let _ = StateReq::decode(&mut dec).await;

        let mut dec = Decoder::new(Cursor::new(data));
        let _ = ActionReq::decode(&mut dec).await;

        let mut dec = Decoder::new(Cursor::new(data));
        let with_timestamp = data.first().map(|b| b % 2 == 0).unwrap_or(false);
        let _ = CbState::decode(&mut dec, with_timestamp).await;

        let mut dec = Decoder::new(Cursor::new(data));
        let _ = DropExpired::decode(&mut dec).await;
    });
});
