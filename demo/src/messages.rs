// Generated by tagwire. Do not edit.

use tagwire::{Packet, WireError, WireReader, WireWriter};

#[derive(Debug, Clone, PartialEq)]
pub struct HeartBeat;

impl Packet for HeartBeat {
    const HEADER: u8 = 0;
    const SIZE: usize = 1;

    fn pack(&self) -> Vec<u8> {
        let mut w = WireWriter::with_capacity(Self::SIZE);
        w.write_u8(Self::HEADER);
        w.into_bytes()
    }

    fn unpack(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() != Self::SIZE {
            return Err(WireError::WrongLength { expected: Self::SIZE, found: bytes.len() });
        }
        Ok(HeartBeat)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EStop;

impl Packet for EStop {
    const HEADER: u8 = 4;
    const SIZE: usize = 1;

    fn pack(&self) -> Vec<u8> {
        let mut w = WireWriter::with_capacity(Self::SIZE);
        w.write_u8(Self::HEADER);
        w.into_bytes()
    }

    fn unpack(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() != Self::SIZE {
            return Err(WireError::WrongLength { expected: Self::SIZE, found: bytes.len() });
        }
        Ok(EStop)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mode {
    pub value: u8,
}

impl Packet for Mode {
    const HEADER: u8 = 14;
    const SIZE: usize = 2;

    fn pack(&self) -> Vec<u8> {
        let mut w = WireWriter::with_capacity(Self::SIZE);
        w.write_u8(Self::HEADER);
        w.write_u8(self.value);
        w.into_bytes()
    }

    fn unpack(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() != Self::SIZE {
            return Err(WireError::WrongLength { expected: Self::SIZE, found: bytes.len() });
        }
        let mut r = WireReader::new(bytes);
        r.skip(1)?;
        let value = r.read_u8()?;
        Ok(Mode { value })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Q {
    pub axis_angle: [f32; 6],
}

impl Packet for Q {
    const HEADER: u8 = 16;
    const SIZE: usize = 25;

    fn pack(&self) -> Vec<u8> {
        let mut w = WireWriter::with_capacity(Self::SIZE);
        w.write_u8(Self::HEADER);
        for v0 in self.axis_angle.iter() {
            w.write_f32(*v0);
        }
        w.into_bytes()
    }

    fn unpack(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() != Self::SIZE {
            return Err(WireError::WrongLength { expected: Self::SIZE, found: bytes.len() });
        }
        let mut r = WireReader::new(bytes);
        r.skip(1)?;
        let mut axis_angle = [0.0f32; 6];
        for v0 in axis_angle.iter_mut() {
            *v0 = r.read_f32()?;
        }
        Ok(Q { axis_angle })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryLength {
    pub length: u32,
}

impl Packet for TrajectoryLength {
    const HEADER: u8 = 18;
    const SIZE: usize = 5;

    fn pack(&self) -> Vec<u8> {
        let mut w = WireWriter::with_capacity(Self::SIZE);
        w.write_u8(Self::HEADER);
        w.write_u32(self.length);
        w.into_bytes()
    }

    fn unpack(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() != Self::SIZE {
            return Err(WireError::WrongLength { expected: Self::SIZE, found: bytes.len() });
        }
        let mut r = WireReader::new(bytes);
        r.skip(1)?;
        let length = r.read_u32()?;
        Ok(TrajectoryLength { length })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub data_array: [[f32; 6]; 10],
}

impl Packet for Trajectory {
    const HEADER: u8 = 22;
    const SIZE: usize = 241;

    fn pack(&self) -> Vec<u8> {
        let mut w = WireWriter::with_capacity(Self::SIZE);
        w.write_u8(Self::HEADER);
        for v0 in self.data_array.iter() {
            for v1 in v0.iter() {
                w.write_f32(*v1);
            }
        }
        w.into_bytes()
    }

    fn unpack(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() != Self::SIZE {
            return Err(WireError::WrongLength { expected: Self::SIZE, found: bytes.len() });
        }
        let mut r = WireReader::new(bytes);
        r.skip(1)?;
        let mut data_array = [[0.0f32; 6]; 10];
        for v0 in data_array.iter_mut() {
            for v1 in v0.iter_mut() {
                *v1 = r.read_f32()?;
            }
        }
        Ok(Trajectory { data_array })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ack {
    pub sequence: u32,
}

impl Packet for Ack {
    const HEADER: u8 = 24;
    const SIZE: usize = 5;

    fn pack(&self) -> Vec<u8> {
        let mut w = WireWriter::with_capacity(Self::SIZE);
        w.write_u8(Self::HEADER);
        w.write_u32(self.sequence);
        w.into_bytes()
    }

    fn unpack(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() != Self::SIZE {
            return Err(WireError::WrongLength { expected: Self::SIZE, found: bytes.len() });
        }
        let mut r = WireReader::new(bytes);
        r.skip(1)?;
        let sequence = r.read_u32()?;
        Ok(Ack { sequence })
    }
}

/// Every message of this schema, as one dispatchable sum.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    HeartBeat(HeartBeat),
    EStop(EStop),
    Mode(Mode),
    Q(Q),
    TrajectoryLength(TrajectoryLength),
    Trajectory(Trajectory),
    Ack(Ack),
}

/// Decode an incoming blob by its header tag.
pub fn decode_message(bytes: &[u8]) -> Result<Message, WireError> {
    let tag = match bytes.first() {
        Some(tag) => *tag,
        None => return Err(WireError::WrongLength { expected: 1, found: 0 }),
    };
    match tag {
        0 => Ok(Message::HeartBeat(HeartBeat::unpack(bytes)?)),
        4 => Ok(Message::EStop(EStop::unpack(bytes)?)),
        14 => Ok(Message::Mode(Mode::unpack(bytes)?)),
        16 => Ok(Message::Q(Q::unpack(bytes)?)),
        18 => Ok(Message::TrajectoryLength(TrajectoryLength::unpack(bytes)?)),
        22 => Ok(Message::Trajectory(Trajectory::unpack(bytes)?)),
        24 => Ok(Message::Ack(Ack::unpack(bytes)?)),
        unknown => Err(WireError::UnknownHeader(unknown)),
    }
}
