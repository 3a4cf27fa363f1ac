//! Producer/consumer pipeline demo.
//!
//! A receive thread stands in for a device callback, feeding raw frames
//! into a shared queue; a processing thread pops, verifies, and renders
//! them until the coordinator stops the flow. This is the arrangement the
//! queue is built for.
//!
//! Run with:
//!   cargo run --example pipeline

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use relay_hex::encode_spaced;
use relay_queue::BlockingQueue;

const FRAME_COUNT: u8 = 10;

/// Builds a synthetic device frame: start byte, payload, xor checksum.
fn frame(seq: u8) -> Vec<u8> {
    let payload = [0xDE, 0xAD, seq];
    let checksum = payload.iter().fold(0u8, |acc, b| acc ^ b);

    let mut frame = vec![0x7E];
    frame.extend_from_slice(&payload);
    frame.push(checksum);
    frame
}

fn checksum_ok(frame: &[u8]) -> bool {
    match frame {
        [0x7E, payload @ .., checksum] => {
            payload.iter().fold(0u8, |acc, b| acc ^ b) == *checksum
        }
        _ => false,
    }
}

fn main() {
    let q = Arc::new(BlockingQueue::<Vec<u8>>::with_config(8, "rx-frames", true));

    let receiver = {
        let q = Arc::clone(&q);
        thread::spawn(move || {
            for seq in 0..FRAME_COUNT {
                q.push(frame(seq)).unwrap();
                thread::sleep(Duration::from_millis(5));
            }
        })
    };

    let processor = {
        let q = Arc::clone(&q);
        thread::spawn(move || {
            let mut processed = 0u32;
            while let Ok(frame) = q.pop() {
                let status = if checksum_ok(&frame) { "ok" } else { "BAD" };
                println!("recv [{status}] {}", encode_spaced(&frame));
                processed += 1;
            }
            println!("processor: queue closed, exiting");
            processed
        })
    };

    receiver.join().unwrap();

    // Let the processor catch up, then stop the flow.
    while !q.is_empty() {
        thread::yield_now();
    }
    q.close();

    let processed = processor.join().unwrap();
    println!("processed {processed} frames");

    // A restart: frames that arrive while nobody is processing stay
    // buffered, and close() withholds rather than destroys them.
    q.open();
    q.push(frame(0xF0)).unwrap();
    q.push(frame(0xF1)).unwrap();
    q.close();

    for stranded in q.drain() {
        println!("reclaimed {}", encode_spaced(&stranded));
    }
}
