//! F1 22 packet bodies and their per-car sub-records.

use f1_udp_wire::{FixedStr, Wire, wire_struct};

use super::header::PacketHeader;

/// Cars in every per-car array.
pub const NUM_CARS: usize = 22;
pub const NUM_MARSHAL_ZONES: usize = 21;
pub const NUM_WEATHER_FORECAST_SAMPLES: usize = 56;
pub const MAX_LAP_HISTORY: usize = 100;
pub const MAX_TYRE_STINTS: usize = 8;
/// Bytes reserved for a participant or lobby player name.
pub const NAME_LEN: usize = 48;

// ── Motion (id 0) ─────────────────────────────────────────────────────────────

wire_struct! {
    pub struct CarMotionData {
        /// World space position, metres.
        pub world_position_x: f32,
        pub world_position_y: f32,
        pub world_position_z: f32,
        /// Velocity in world space, metres/s.
        pub world_velocity_x: f32,
        pub world_velocity_y: f32,
        pub world_velocity_z: f32,
        /// Normalised direction vectors, scaled to `i16` (divide by 32767).
        pub world_forward_dir_x: i16,
        pub world_forward_dir_y: i16,
        pub world_forward_dir_z: i16,
        pub world_right_dir_x: i16,
        pub world_right_dir_y: i16,
        pub world_right_dir_z: i16,
        pub g_force_lateral: f32,
        pub g_force_longitudinal: f32,
        pub g_force_vertical: f32,
        /// Radians.
        pub yaw: f32,
        pub pitch: f32,
        pub roll: f32,
    }
}

wire_struct! {
    /// Car motion for all cars, plus extra detail for the player car only.
    ///
    /// Wheel arrays are ordered RL, RR, FL, FR.
    pub struct PacketMotionData {
        pub header: PacketHeader,
        pub car_motion_data: [CarMotionData; NUM_CARS],
        pub suspension_position: [f32; 4],
        pub suspension_velocity: [f32; 4],
        pub suspension_acceleration: [f32; 4],
        pub wheel_speed: [f32; 4],
        pub wheel_slip: [f32; 4],
        pub local_velocity_x: f32,
        pub local_velocity_y: f32,
        pub local_velocity_z: f32,
        pub angular_velocity_x: f32,
        pub angular_velocity_y: f32,
        pub angular_velocity_z: f32,
        pub angular_acceleration_x: f32,
        pub angular_acceleration_y: f32,
        pub angular_acceleration_z: f32,
        /// Radians.
        pub front_wheels_angle: f32,
    }
}

// ── Session (id 1) ────────────────────────────────────────────────────────────

wire_struct! {
    pub struct MarshalZone {
        /// Fraction (0..1) of the way through the lap the zone starts.
        pub zone_start: f32,
        /// -1 invalid/unknown, 0 none, 1 green, 2 blue, 3 yellow, 4 red.
        pub zone_flag: i8,
    }
}

wire_struct! {
    pub struct WeatherForecastSample {
        pub session_type: u8,
        /// Minutes.
        pub time_offset: u8,
        pub weather: u8,
        pub track_temperature: i8,
        pub track_temperature_change: i8,
        pub air_temperature: i8,
        pub air_temperature_change: i8,
        pub rain_percentage: u8,
    }
}

wire_struct! {
    pub struct PacketSessionData {
        pub header: PacketHeader,
        pub weather: u8,
        /// Celsius.
        pub track_temperature: i8,
        pub air_temperature: i8,
        pub total_laps: u8,
        /// Metres.
        pub track_length: u16,
        pub session_type: u8,
        /// -1 for unknown.
        pub track_id: i8,
        pub formula: u8,
        /// Seconds.
        pub session_time_left: u16,
        pub session_duration: u16,
        /// km/h.
        pub pit_speed_limit: u8,
        pub game_paused: u8,
        pub is_spectating: u8,
        pub spectator_car_index: u8,
        pub sli_pro_native_support: u8,
        pub num_marshal_zones: u8,
        pub marshal_zones: [MarshalZone; NUM_MARSHAL_ZONES],
        pub safety_car_status: u8,
        pub network_game: u8,
        pub num_weather_forecast_samples: u8,
        pub weather_forecast_samples: [WeatherForecastSample; NUM_WEATHER_FORECAST_SAMPLES],
        pub forecast_accuracy: u8,
        pub ai_difficulty: u8,
        pub season_link_identifier: u32,
        pub weekend_link_identifier: u32,
        pub session_link_identifier: u32,
        pub pit_stop_window_ideal_lap: u8,
        pub pit_stop_window_latest_lap: u8,
        pub pit_stop_rejoin_position: u8,
        pub steering_assist: u8,
        pub braking_assist: u8,
        pub gearbox_assist: u8,
        pub pit_assist: u8,
        pub pit_release_assist: u8,
        pub ers_assist: u8,
        pub drs_assist: u8,
        pub dynamic_racing_line: u8,
        pub dynamic_racing_line_type: u8,
        pub game_mode: u8,
        pub rule_set: u8,
        /// Minutes since midnight.
        pub time_of_day: u32,
        pub session_length: u8,
    }
}

// ── Lap data (id 2) ───────────────────────────────────────────────────────────

wire_struct! {
    pub struct LapData {
        pub last_lap_time_in_ms: u32,
        pub current_lap_time_in_ms: u32,
        pub sector1_time_in_ms: u16,
        pub sector2_time_in_ms: u16,
        /// Metres; may be negative before the line on the first lap.
        pub lap_distance: f32,
        pub total_distance: f32,
        /// Seconds.
        pub safety_car_delta: f32,
        pub car_position: u8,
        pub current_lap_num: u8,
        pub pit_status: u8,
        pub num_pit_stops: u8,
        pub sector: u8,
        pub current_lap_invalid: u8,
        /// Accumulated time penalties, seconds.
        pub penalties: u8,
        pub warnings: u8,
        pub num_unserved_drive_through_pens: u8,
        pub num_unserved_stop_go_pens: u8,
        pub grid_position: u8,
        pub driver_status: u8,
        pub result_status: u8,
        pub pit_lane_timer_active: u8,
        pub pit_lane_time_in_lane_in_ms: u16,
        pub pit_stop_timer_in_ms: u16,
        pub pit_stop_should_serve_pen: u8,
    }
}

wire_struct! {
    pub struct PacketLapData {
        pub header: PacketHeader,
        pub lap_data: [LapData; NUM_CARS],
        /// 255 if invalid.
        pub time_trial_pb_car_idx: u8,
        pub time_trial_rival_car_idx: u8,
    }
}

// ── Participants (id 4) ───────────────────────────────────────────────────────

wire_struct! {
    pub struct ParticipantData {
        pub ai_controlled: u8,
        pub driver_id: u8,
        pub network_id: u8,
        pub team_id: u8,
        pub my_team: u8,
        pub race_number: u8,
        pub nationality: u8,
        pub name: FixedStr<NAME_LEN>,
        /// 0 restricted, 1 public.
        pub your_telemetry: u8,
    }
}

wire_struct! {
    pub struct PacketParticipantsData {
        pub header: PacketHeader,
        pub num_active_cars: u8,
        pub participants: [ParticipantData; NUM_CARS],
    }
}

// ── Car setups (id 5) ─────────────────────────────────────────────────────────

wire_struct! {
    pub struct CarSetupData {
        pub front_wing: u8,
        pub rear_wing: u8,
        /// Differential adjustment on throttle, percent.
        pub on_throttle: u8,
        pub off_throttle: u8,
        pub front_camber: f32,
        pub rear_camber: f32,
        pub front_toe: f32,
        pub rear_toe: f32,
        pub front_suspension: u8,
        pub rear_suspension: u8,
        pub front_anti_roll_bar: u8,
        pub rear_anti_roll_bar: u8,
        pub front_suspension_height: u8,
        pub rear_suspension_height: u8,
        pub brake_pressure: u8,
        pub brake_bias: u8,
        /// PSI.
        pub rear_left_tyre_pressure: f32,
        pub rear_right_tyre_pressure: f32,
        pub front_left_tyre_pressure: f32,
        pub front_right_tyre_pressure: f32,
        pub ballast: u8,
        /// Kilograms.
        pub fuel_load: f32,
    }
}

wire_struct! {
    pub struct PacketCarSetupData {
        pub header: PacketHeader,
        pub car_setups: [CarSetupData; NUM_CARS],
    }
}

// ── Car telemetry (id 6) ──────────────────────────────────────────────────────

wire_struct! {
    pub struct CarTelemetryData {
        /// km/h.
        pub speed: u16,
        /// 0.0..=1.0
        pub throttle: f32,
        /// -1.0 full left ..= 1.0 full right
        pub steer: f32,
        pub brake: f32,
        pub clutch: u8,
        /// -1 reverse, 0 neutral, 1..=8 forward.
        pub gear: i8,
        pub engine_rpm: u16,
        pub drs: u8,
        pub rev_lights_percent: u8,
        /// Bit 0 is the leftmost LED.
        pub rev_lights_bit_value: u16,
        /// Celsius, RL RR FL FR.
        pub brakes_temperature: [u16; 4],
        pub tyres_surface_temperature: [u8; 4],
        pub tyres_inner_temperature: [u8; 4],
        pub engine_temperature: u16,
        /// PSI.
        pub tyres_pressure: [f32; 4],
        pub surface_type: [u8; 4],
    }
}

wire_struct! {
    pub struct PacketCarTelemetryData {
        pub header: PacketHeader,
        pub car_telemetry_data: [CarTelemetryData; NUM_CARS],
        /// 255 when the MFD is closed.
        pub mfd_panel_index: u8,
        pub mfd_panel_index_secondary_player: u8,
        /// 0 when no gear is suggested.
        pub suggested_gear: i8,
    }
}

// ── Car status (id 7) ─────────────────────────────────────────────────────────

wire_struct! {
    pub struct CarStatusData {
        pub traction_control: u8,
        pub anti_lock_brakes: u8,
        pub fuel_mix: u8,
        /// Percent.
        pub front_brake_bias: u8,
        pub pit_limiter_status: u8,
        pub fuel_in_tank: f32,
        pub fuel_capacity: f32,
        pub fuel_remaining_laps: f32,
        pub max_rpm: u16,
        pub idle_rpm: u16,
        pub max_gears: u8,
        pub drs_allowed: u8,
        /// Metres; 0 when DRS is not available.
        pub drs_activation_distance: u16,
        pub actual_tyre_compound: u8,
        pub visual_tyre_compound: u8,
        pub tyres_age_laps: u8,
        /// -1 invalid/unknown, 0 none, 1 green, 2 blue, 3 yellow, 4 red.
        pub vehicle_fia_flags: i8,
        /// Joules.
        pub ers_store_energy: f32,
        pub ers_deploy_mode: u8,
        pub ers_harvested_this_lap_mguk: f32,
        pub ers_harvested_this_lap_mguh: f32,
        pub ers_deployed_this_lap: f32,
        pub network_paused: u8,
    }
}

wire_struct! {
    pub struct PacketCarStatusData {
        pub header: PacketHeader,
        pub car_status_data: [CarStatusData; NUM_CARS],
    }
}

// ── Final classification (id 8) ───────────────────────────────────────────────

wire_struct! {
    pub struct FinalClassificationData {
        pub position: u8,
        pub num_laps: u8,
        pub grid_position: u8,
        pub points: u8,
        pub num_pit_stops: u8,
        pub result_status: u8,
        pub best_lap_time_in_ms: u32,
        /// Seconds, without penalties.
        pub total_race_time: f64,
        pub penalties_time: u8,
        pub num_penalties: u8,
        pub num_tyre_stints: u8,
        pub tyre_stints_actual: [u8; MAX_TYRE_STINTS],
        pub tyre_stints_visual: [u8; MAX_TYRE_STINTS],
        pub tyre_stints_end_laps: [u8; MAX_TYRE_STINTS],
    }
}

wire_struct! {
    pub struct PacketFinalClassificationData {
        pub header: PacketHeader,
        pub num_cars: u8,
        pub classification_data: [FinalClassificationData; NUM_CARS],
    }
}

// ── Lobby info (id 9) ─────────────────────────────────────────────────────────

wire_struct! {
    pub struct LobbyInfoData {
        pub ai_controlled: u8,
        pub team_id: u8,
        pub nationality: u8,
        pub name: FixedStr<NAME_LEN>,
        pub car_number: u8,
        /// 0 not ready, 1 ready, 2 spectating.
        pub ready_status: u8,
    }
}

wire_struct! {
    pub struct PacketLobbyInfoData {
        pub header: PacketHeader,
        pub num_players: u8,
        pub lobby_players: [LobbyInfoData; NUM_CARS],
    }
}

// ── Car damage (id 10) ────────────────────────────────────────────────────────

wire_struct! {
    pub struct CarDamageData {
        /// Percent.
        pub tyres_wear: [f32; 4],
        pub tyres_damage: [u8; 4],
        pub brakes_damage: [u8; 4],
        pub front_left_wing_damage: u8,
        pub front_right_wing_damage: u8,
        pub rear_wing_damage: u8,
        pub floor_damage: u8,
        pub diffuser_damage: u8,
        pub sidepod_damage: u8,
        pub drs_fault: u8,
        pub ers_fault: u8,
        pub gear_box_damage: u8,
        pub engine_damage: u8,
        pub engine_mguh_wear: u8,
        pub engine_es_wear: u8,
        pub engine_ce_wear: u8,
        pub engine_ice_wear: u8,
        pub engine_mguk_wear: u8,
        pub engine_tc_wear: u8,
        pub engine_blown: u8,
        pub engine_seized: u8,
    }
}

wire_struct! {
    pub struct PacketCarDamageData {
        pub header: PacketHeader,
        pub car_damage_data: [CarDamageData; NUM_CARS],
    }
}

// ── Session history (id 11) ───────────────────────────────────────────────────

wire_struct! {
    pub struct LapHistoryData {
        pub lap_time_in_ms: u32,
        pub sector1_time_in_ms: u16,
        pub sector2_time_in_ms: u16,
        pub sector3_time_in_ms: u16,
        /// Bit 0 lap valid, bits 1..=3 sectors 1..=3 valid.
        pub lap_valid_bit_flags: u8,
    }
}

wire_struct! {
    pub struct TyreStintHistoryData {
        /// 255 for the current stint.
        pub end_lap: u8,
        pub tyre_actual_compound: u8,
        pub tyre_visual_compound: u8,
    }
}

wire_struct! {
    pub struct PacketSessionHistoryData {
        pub header: PacketHeader,
        pub car_idx: u8,
        pub num_laps: u8,
        pub num_tyre_stints: u8,
        pub best_lap_time_lap_num: u8,
        pub best_sector1_lap_num: u8,
        pub best_sector2_lap_num: u8,
        pub best_sector3_lap_num: u8,
        pub lap_history_data: [LapHistoryData; MAX_LAP_HISTORY],
        pub tyre_stints_history_data: [TyreStintHistoryData; MAX_TYRE_STINTS],
    }
}

// ── Sub-record sizes ──────────────────────────────────────────────────────────

const _: () = assert!(CarMotionData::SIZE == 60);
const _: () = assert!(MarshalZone::SIZE == 5);
const _: () = assert!(WeatherForecastSample::SIZE == 8);
const _: () = assert!(LapData::SIZE == 43);
const _: () = assert!(ParticipantData::SIZE == 56);
const _: () = assert!(CarSetupData::SIZE == 49);
const _: () = assert!(CarTelemetryData::SIZE == 60);
const _: () = assert!(CarStatusData::SIZE == 47);
const _: () = assert!(FinalClassificationData::SIZE == 45);
const _: () = assert!(LobbyInfoData::SIZE == 53);
const _: () = assert!(CarDamageData::SIZE == 42);
const _: () = assert!(LapHistoryData::SIZE == 11);
const _: () = assert!(TyreStintHistoryData::SIZE == 3);
