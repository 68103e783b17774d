// demo/src/main.rs

mod messages;

use tagwire::{Packet, WireError};

use messages::{
    decode_message, Ack, EStop, HeartBeat, Message, Mode, Q, Trajectory, TrajectoryLength,
};

fn main() -> Result<(), WireError> {
    // Pack a Mode command; the header tag is filled in automatically.
    let mode = Mode { value: 7 };
    println!("Mode {{ value: 7 }} packs to {:?}", mode.pack());

    // Simulate a receiver draining untyped frames off the link and
    // dispatching each one on its header tag.
    let frames = vec![
        HeartBeat.pack(),
        Mode { value: 2 }.pack(),
        Q { axis_angle: [0.0, 0.25, -0.5, 1.0, -1.5, 2.0] }.pack(),
        TrajectoryLength { length: 10 }.pack(),
        Trajectory { data_array: [[0.0; 6]; 10] }.pack(),
        EStop.pack(),
        Ack { sequence: 42 }.pack(),
    ];
    for frame in &frames {
        match decode_message(frame)? {
            Message::HeartBeat(_) => println!("heartbeat"),
            Message::EStop(_) => println!("emergency stop"),
            Message::Mode(m) => println!("mode change: {}", m.value),
            Message::Q(q) => println!("joint state: {:?}", q.axis_angle),
            Message::TrajectoryLength(t) => println!("trajectory of {} points inbound", t.length),
            Message::Trajectory(t) => println!("trajectory row 0: {:?}", t.data_array[0]),
            Message::Ack(a) => println!("ack #{}", a.sequence),
        }
    }

    Ok(())
}
