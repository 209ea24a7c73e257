pub const SENSOR_DEVICE_IDS: [&str; 4] = ["YG19P0025", "YG19D0004", "YG19W0001", "YG19O0005"];
