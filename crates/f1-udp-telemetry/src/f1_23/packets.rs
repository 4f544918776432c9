//! F1 23 packet bodies and their per-car sub-records.

use f1_udp_wire::{FixedStr, Wire, wire_struct};

use super::header::PacketHeader;

pub const NUM_CARS: usize = 22;
pub const NUM_MARSHAL_ZONES: usize = 21;
pub const NUM_WEATHER_FORECAST_SAMPLES: usize = 56;
pub const MAX_LAP_HISTORY: usize = 100;
pub const MAX_TYRE_STINTS: usize = 8;
pub const NUM_TYRE_SETS: usize = 20;
pub const NAME_LEN: usize = 48;

// ── Motion (id 0) ─────────────────────────────────────────────────────────────

wire_struct! {
    pub struct CarMotionData {
        pub world_position_x: f32,
        pub world_position_y: f32,
        pub world_position_z: f32,
        pub world_velocity_x: f32,
        pub world_velocity_y: f32,
        pub world_velocity_z: f32,
        pub world_forward_dir_x: i16,
        pub world_forward_dir_y: i16,
        pub world_forward_dir_z: i16,
        pub world_right_dir_x: i16,
        pub world_right_dir_y: i16,
        pub world_right_dir_z: i16,
        pub g_force_lateral: f32,
        pub g_force_longitudinal: f32,
        pub g_force_vertical: f32,
        pub yaw: f32,
        pub pitch: f32,
        pub roll: f32,
    }
}

wire_struct! {
    /// Car motion for all cars. Player-only detail moved to [`PacketMotionExData`].
    pub struct PacketMotionData {
        pub header: PacketHeader,
        pub car_motion_data: [CarMotionData; NUM_CARS],
    }
}

// ── Session (id 1) ────────────────────────────────────────────────────────────

wire_struct! {
    pub struct MarshalZone {
        pub zone_start: f32,
        pub zone_flag: i8,
    }
}

wire_struct! {
    pub struct WeatherForecastSample {
        pub session_type: u8,
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
        pub track_temperature: i8,
        pub air_temperature: i8,
        pub total_laps: u8,
        pub track_length: u16,
        pub session_type: u8,
        pub track_id: i8,
        pub formula: u8,
        pub session_time_left: u16,
        pub session_duration: u16,
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
        pub time_of_day: u32,
        pub session_length: u8,
        /// 0 MPH, 1 KPH.
        pub speed_units_lead_player: u8,
        /// 0 Celsius, 1 Fahrenheit.
        pub temperature_units_lead_player: u8,
        pub speed_units_secondary_player: u8,
        pub temperature_units_secondary_player: u8,
        pub num_safety_car_periods: u8,
        pub num_virtual_safety_car_periods: u8,
        pub num_red_flag_periods: u8,
    }
}

// ── Lap data (id 2) ───────────────────────────────────────────────────────────

wire_struct! {
    pub struct LapData {
        pub last_lap_time_in_ms: u32,
        pub current_lap_time_in_ms: u32,
        /// Millisecond part of the sector time.
        pub sector1_time_in_ms: u16,
        /// Whole-minute part of the sector time.
        pub sector1_time_minutes: u8,
        pub sector2_time_in_ms: u16,
        pub sector2_time_minutes: u8,
        pub delta_to_car_in_front_in_ms: u16,
        pub delta_to_race_leader_in_ms: u16,
        pub lap_distance: f32,
        pub total_distance: f32,
        pub safety_car_delta: f32,
        pub car_position: u8,
        pub current_lap_num: u8,
        pub pit_status: u8,
        pub num_pit_stops: u8,
        pub sector: u8,
        pub current_lap_invalid: u8,
        pub penalties: u8,
        pub total_warnings: u8,
        pub corner_cutting_warnings: u8,
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
        pub your_telemetry: u8,
        pub show_online_names: u8,
        /// 1 Steam, 3 PlayStation, 4 Xbox, 6 Origin, 255 unknown.
        pub platform: u8,
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
        pub rear_left_tyre_pressure: f32,
        pub rear_right_tyre_pressure: f32,
        pub front_left_tyre_pressure: f32,
        pub front_right_tyre_pressure: f32,
        pub ballast: u8,
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
        pub speed: u16,
        pub throttle: f32,
        pub steer: f32,
        pub brake: f32,
        pub clutch: u8,
        pub gear: i8,
        pub engine_rpm: u16,
        pub drs: u8,
        pub rev_lights_percent: u8,
        pub rev_lights_bit_value: u16,
        pub brakes_temperature: [u16; 4],
        pub tyres_surface_temperature: [u8; 4],
        pub tyres_inner_temperature: [u8; 4],
        pub engine_temperature: u16,
        pub tyres_pressure: [f32; 4],
        pub surface_type: [u8; 4],
    }
}

wire_struct! {
    pub struct PacketCarTelemetryData {
        pub header: PacketHeader,
        pub car_telemetry_data: [CarTelemetryData; NUM_CARS],
        pub mfd_panel_index: u8,
        pub mfd_panel_index_secondary_player: u8,
        pub suggested_gear: i8,
    }
}

// ── Car status (id 7) ─────────────────────────────────────────────────────────

wire_struct! {
    pub struct CarStatusData {
        pub traction_control: u8,
        pub anti_lock_brakes: u8,
        pub fuel_mix: u8,
        pub front_brake_bias: u8,
        pub pit_limiter_status: u8,
        pub fuel_in_tank: f32,
        pub fuel_capacity: f32,
        pub fuel_remaining_laps: f32,
        pub max_rpm: u16,
        pub idle_rpm: u16,
        pub max_gears: u8,
        pub drs_allowed: u8,
        pub drs_activation_distance: u16,
        pub actual_tyre_compound: u8,
        pub visual_tyre_compound: u8,
        pub tyres_age_laps: u8,
        pub vehicle_fia_flags: i8,
        /// Watts.
        pub engine_power_ice: f32,
        pub engine_power_mguk: f32,
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
        pub platform: u8,
        pub name: FixedStr<NAME_LEN>,
        pub car_number: u8,
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
        pub sector1_time_minutes: u8,
        pub sector2_time_in_ms: u16,
        pub sector2_time_minutes: u8,
        pub sector3_time_in_ms: u16,
        pub sector3_time_minutes: u8,
        pub lap_valid_bit_flags: u8,
    }
}

wire_struct! {
    pub struct TyreStintHistoryData {
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

// ── Tyre sets (id 12) ─────────────────────────────────────────────────────────

wire_struct! {
    pub struct TyreSetData {
        pub actual_tyre_compound: u8,
        pub visual_tyre_compound: u8,
        /// Percent.
        pub wear: u8,
        pub available: u8,
        pub recommended_session: u8,
        /// Laps left in this set.
        pub life_span: u8,
        pub usable_life: u8,
        /// Lap time delta to the fitted set, milliseconds.
        pub lap_delta_time: i16,
        pub fitted: u8,
    }
}

wire_struct! {
    /// 13 dry sets followed by 7 wet sets.
    pub struct PacketTyreSetsData {
        pub header: PacketHeader,
        pub car_idx: u8,
        pub tyre_set_data: [TyreSetData; NUM_TYRE_SETS],
        pub fitted_idx: u8,
    }
}

// ── Motion ex (id 13) ─────────────────────────────────────────────────────────

wire_struct! {
    /// Extended motion data for the player car only. Wheel arrays are RL, RR, FL, FR.
    pub struct PacketMotionExData {
        pub header: PacketHeader,
        pub suspension_position: [f32; 4],
        pub suspension_velocity: [f32; 4],
        pub suspension_acceleration: [f32; 4],
        pub wheel_speed: [f32; 4],
        pub wheel_slip_ratio: [f32; 4],
        pub wheel_slip_angle: [f32; 4],
        pub wheel_lat_force: [f32; 4],
        pub wheel_long_force: [f32; 4],
        /// Metres.
        pub height_of_cog_above_ground: f32,
        pub local_velocity_x: f32,
        pub local_velocity_y: f32,
        pub local_velocity_z: f32,
        pub angular_velocity_x: f32,
        pub angular_velocity_y: f32,
        pub angular_velocity_z: f32,
        pub angular_acceleration_x: f32,
        pub angular_acceleration_y: f32,
        pub angular_acceleration_z: f32,
        pub front_wheels_angle: f32,
        pub wheel_vert_force: [f32; 4],
    }
}

const _: () = assert!(CarMotionData::SIZE == 60);
const _: () = assert!(LapData::SIZE == 50);
const _: () = assert!(ParticipantData::SIZE == 58);
const _: () = assert!(CarTelemetryData::SIZE == 60);
const _: () = assert!(CarStatusData::SIZE == 55);
const _: () = assert!(LobbyInfoData::SIZE == 54);
const _: () = assert!(LapHistoryData::SIZE == 14);
const _: () = assert!(TyreSetData::SIZE == 10);
