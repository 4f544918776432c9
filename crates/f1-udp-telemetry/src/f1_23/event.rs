//! F1 23 event packet.
//!
//! The body is a 4-byte ASCII code followed by a 12-byte details area. The
//! code alone decides which payload shape (if any) occupies that area, so
//! the decoded form pairs an [`EventCode`] with the matching
//! [`EventDetails`] variant.

use std::fmt;

use f1_udp_wire::{
    ByteReader, ByteWriter, FieldDef, FieldList, FieldValue, Layout, Wire, join_path, wire_struct,
};

use super::header::PacketHeader;
use crate::buttons::ButtonFlags;

/// Width of the details area, whatever the code.
pub const EVENT_DETAILS_SIZE: usize = 12;

wire_struct! {
    pub struct FastestLap {
        pub vehicle_idx: u8,
        /// Seconds.
        pub lap_time: f32,
    }
}

wire_struct! {
    pub struct Retirement {
        pub vehicle_idx: u8,
    }
}

wire_struct! {
    pub struct TeamMateInPits {
        pub vehicle_idx: u8,
    }
}

wire_struct! {
    pub struct RaceWinner {
        pub vehicle_idx: u8,
    }
}

wire_struct! {
    pub struct Penalty {
        pub penalty_type: u8,
        pub infringement_type: u8,
        pub vehicle_idx: u8,
        pub other_vehicle_idx: u8,
        /// Seconds, or 255 when not applicable.
        pub time: u8,
        pub lap_num: u8,
        pub places_gained: u8,
    }
}

wire_struct! {
    pub struct SpeedTrap {
        pub vehicle_idx: u8,
        /// km/h.
        pub speed: f32,
        pub is_overall_fastest_in_session: u8,
        pub is_driver_fastest_in_session: u8,
        pub fastest_vehicle_idx_in_session: u8,
        pub fastest_speed_in_session: f32,
    }
}

wire_struct! {
    pub struct StartLights {
        pub num_lights: u8,
    }
}

wire_struct! {
    pub struct DriveThroughPenaltyServed {
        pub vehicle_idx: u8,
    }
}

wire_struct! {
    pub struct StopGoPenaltyServed {
        pub vehicle_idx: u8,
    }
}

wire_struct! {
    pub struct Flashback {
        pub flashback_frame_identifier: u32,
        pub flashback_session_time: f32,
    }
}

wire_struct! {
    pub struct Buttons {
        pub button_status: ButtonFlags,
    }
}

wire_struct! {
    pub struct Overtake {
        pub overtaking_vehicle_idx: u8,
        pub being_overtaken_vehicle_idx: u8,
    }
}

const _: () = assert!(SpeedTrap::SIZE == EVENT_DETAILS_SIZE);
const _: () = assert!(Flashback::SIZE <= EVENT_DETAILS_SIZE);
const _: () = assert!(Penalty::SIZE <= EVENT_DETAILS_SIZE);

/// The event string code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCode {
    /// `SSTA`
    SessionStarted,
    /// `SEND`
    SessionEnded,
    /// `FTLP`
    FastestLap,
    /// `RTMT`
    Retirement,
    /// `DRSE`
    DrsEnabled,
    /// `DRSD`
    DrsDisabled,
    /// `TMPT`
    TeamMateInPits,
    /// `CHQF`
    ChequeredFlag,
    /// `RCWN`
    RaceWinner,
    /// `PENA`
    PenaltyIssued,
    /// `SPTP`
    SpeedTrapTriggered,
    /// `STLG`
    StartLights,
    /// `LGOT`
    LightsOut,
    /// `DTSV`
    DriveThroughServed,
    /// `SGSV`
    StopGoServed,
    /// `FLBK`
    Flashback,
    /// `BUTN`
    ButtonStatus,
    /// `RDFL`
    RedFlag,
    /// `OVTK`
    Overtake,
    /// Any code this generation does not define.
    Unknown([u8; 4]),
}

impl EventCode {
    pub fn from_bytes(code: [u8; 4]) -> Self {
        match &code {
            b"SSTA" => EventCode::SessionStarted,
            b"SEND" => EventCode::SessionEnded,
            b"FTLP" => EventCode::FastestLap,
            b"RTMT" => EventCode::Retirement,
            b"DRSE" => EventCode::DrsEnabled,
            b"DRSD" => EventCode::DrsDisabled,
            b"TMPT" => EventCode::TeamMateInPits,
            b"CHQF" => EventCode::ChequeredFlag,
            b"RCWN" => EventCode::RaceWinner,
            b"PENA" => EventCode::PenaltyIssued,
            b"SPTP" => EventCode::SpeedTrapTriggered,
            b"STLG" => EventCode::StartLights,
            b"LGOT" => EventCode::LightsOut,
            b"DTSV" => EventCode::DriveThroughServed,
            b"SGSV" => EventCode::StopGoServed,
            b"FLBK" => EventCode::Flashback,
            b"BUTN" => EventCode::ButtonStatus,
            b"RDFL" => EventCode::RedFlag,
            b"OVTK" => EventCode::Overtake,
            _ => EventCode::Unknown(code),
        }
    }

    pub fn as_bytes(self) -> [u8; 4] {
        match self {
            EventCode::SessionStarted => *b"SSTA",
            EventCode::SessionEnded => *b"SEND",
            EventCode::FastestLap => *b"FTLP",
            EventCode::Retirement => *b"RTMT",
            EventCode::DrsEnabled => *b"DRSE",
            EventCode::DrsDisabled => *b"DRSD",
            EventCode::TeamMateInPits => *b"TMPT",
            EventCode::ChequeredFlag => *b"CHQF",
            EventCode::RaceWinner => *b"RCWN",
            EventCode::PenaltyIssued => *b"PENA",
            EventCode::SpeedTrapTriggered => *b"SPTP",
            EventCode::StartLights => *b"STLG",
            EventCode::LightsOut => *b"LGOT",
            EventCode::DriveThroughServed => *b"DTSV",
            EventCode::StopGoServed => *b"SGSV",
            EventCode::Flashback => *b"FLBK",
            EventCode::ButtonStatus => *b"BUTN",
            EventCode::RedFlag => *b"RDFL",
            EventCode::Overtake => *b"OVTK",
            EventCode::Unknown(code) => code,
        }
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.as_bytes()))
    }
}

/// Payload of an event; exactly one variant is valid for each code.
#[derive(Debug, Clone, PartialEq)]
pub enum EventDetails {
    /// The code carries no payload.
    None,
    FastestLap(FastestLap),
    Retirement(Retirement),
    TeamMateInPits(TeamMateInPits),
    RaceWinner(RaceWinner),
    Penalty(Penalty),
    SpeedTrap(SpeedTrap),
    StartLights(StartLights),
    DriveThroughPenaltyServed(DriveThroughPenaltyServed),
    StopGoPenaltyServed(StopGoPenaltyServed),
    Flashback(Flashback),
    Buttons(Buttons),
    Overtake(Overtake),
    /// Raw details area of an unrecognised code.
    Unknown([u8; EVENT_DETAILS_SIZE]),
}

impl EventDetails {
    fn read(code: EventCode, raw: &[u8; EVENT_DETAILS_SIZE]) -> Self {
        let r = &mut ByteReader::new(raw);
        match code {
            EventCode::FastestLap => EventDetails::FastestLap(FastestLap::read(r)),
            EventCode::Retirement => EventDetails::Retirement(Retirement::read(r)),
            EventCode::TeamMateInPits => EventDetails::TeamMateInPits(TeamMateInPits::read(r)),
            EventCode::RaceWinner => EventDetails::RaceWinner(RaceWinner::read(r)),
            EventCode::PenaltyIssued => EventDetails::Penalty(Penalty::read(r)),
            EventCode::SpeedTrapTriggered => EventDetails::SpeedTrap(SpeedTrap::read(r)),
            EventCode::StartLights => EventDetails::StartLights(StartLights::read(r)),
            EventCode::DriveThroughServed => {
                EventDetails::DriveThroughPenaltyServed(DriveThroughPenaltyServed::read(r))
            }
            EventCode::StopGoServed => {
                EventDetails::StopGoPenaltyServed(StopGoPenaltyServed::read(r))
            }
            EventCode::Flashback => EventDetails::Flashback(Flashback::read(r)),
            EventCode::ButtonStatus => EventDetails::Buttons(Buttons::read(r)),
            EventCode::Overtake => EventDetails::Overtake(Overtake::read(r)),
            EventCode::SessionStarted
            | EventCode::SessionEnded
            | EventCode::DrsEnabled
            | EventCode::DrsDisabled
            | EventCode::ChequeredFlag
            | EventCode::LightsOut
            | EventCode::RedFlag => EventDetails::None,
            EventCode::Unknown(_) => EventDetails::Unknown(*raw),
        }
    }

    /// Writes the payload zero-padded to the full details width.
    fn write(&self, w: &mut ByteWriter) {
        let start = w.len();
        match self {
            EventDetails::None => {}
            EventDetails::FastestLap(d) => d.write(w),
            EventDetails::Retirement(d) => d.write(w),
            EventDetails::TeamMateInPits(d) => d.write(w),
            EventDetails::RaceWinner(d) => d.write(w),
            EventDetails::Penalty(d) => d.write(w),
            EventDetails::SpeedTrap(d) => d.write(w),
            EventDetails::StartLights(d) => d.write(w),
            EventDetails::DriveThroughPenaltyServed(d) => d.write(w),
            EventDetails::StopGoPenaltyServed(d) => d.write(w),
            EventDetails::Flashback(d) => d.write(w),
            EventDetails::Buttons(d) => d.write(w),
            EventDetails::Overtake(d) => d.write(w),
            EventDetails::Unknown(raw) => {
                w.put(raw);
            }
        }
        let written = w.len().saturating_sub(start);
        w.zeros(EVENT_DETAILS_SIZE.saturating_sub(written));
    }

    fn visit(&self, path: &str, out: &mut FieldList) {
        match self {
            EventDetails::None => {}
            EventDetails::FastestLap(d) => d.visit(path, out),
            EventDetails::Retirement(d) => d.visit(path, out),
            EventDetails::TeamMateInPits(d) => d.visit(path, out),
            EventDetails::RaceWinner(d) => d.visit(path, out),
            EventDetails::Penalty(d) => d.visit(path, out),
            EventDetails::SpeedTrap(d) => d.visit(path, out),
            EventDetails::StartLights(d) => d.visit(path, out),
            EventDetails::DriveThroughPenaltyServed(d) => d.visit(path, out),
            EventDetails::StopGoPenaltyServed(d) => d.visit(path, out),
            EventDetails::Flashback(d) => d.visit(path, out),
            EventDetails::Buttons(d) => d.visit(path, out),
            EventDetails::Overtake(d) => d.visit(path, out),
            EventDetails::Unknown(raw) => out.push(path, FieldValue::Bytes(raw.to_vec())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PacketEventData {
    pub header: PacketHeader,
    pub event_code: EventCode,
    pub event_details: EventDetails,
}

impl Wire for PacketEventData {
    const SIZE: usize = PacketHeader::SIZE + 4 + EVENT_DETAILS_SIZE;

    fn read(r: &mut ByteReader<'_>) -> Self {
        let header = PacketHeader::read(r);
        let event_code = EventCode::from_bytes(r.take::<4>());
        let raw = r.take::<EVENT_DETAILS_SIZE>();
        Self {
            header,
            event_code,
            event_details: EventDetails::read(event_code, &raw),
        }
    }

    fn write(&self, w: &mut ByteWriter) {
        self.header.write(w);
        w.put(&self.event_code.as_bytes());
        self.event_details.write(w);
    }

    fn visit(&self, path: &str, out: &mut FieldList) {
        self.header.visit(&join_path(path, "header"), out);
        out.push(
            &join_path(path, "event_string_code"),
            FieldValue::Text(self.event_code.to_string()),
        );
        self.event_details
            .visit(&join_path(path, "event_details"), out);
    }
}

impl Layout for PacketEventData {
    const NAME: &'static str = "PacketEventData";
    const FIELDS: &'static [FieldDef] = &[
        FieldDef {
            name: "header",
            type_name: "PacketHeader",
            size: PacketHeader::SIZE,
        },
        FieldDef {
            name: "event_string_code",
            type_name: "[u8; 4]",
            size: 4,
        },
        FieldDef {
            name: "event_details",
            type_name: "EventDetails",
            size: EVENT_DETAILS_SIZE,
        },
    ];
}
