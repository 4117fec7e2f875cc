//! Host-based tests for the MagTag vaccination tracker
//! These tests run on the development machine, not on the ESP32-S2
