//! Feeds a simulated GPS sentence stream through the decoder and logs the
//! results, standing in for a serial transport loop.
//!
//! Run with `RUST_LOG=info cargo run --example gps_feed`.

use nmea_decoder::{ChecksumResult, DecodedRecord, Decoder};

/// The sentences a receiver-less test rig replays over a loopback UART.
/// Some of them circulate with incorrect checksums; the decoder reports
/// that without dropping the record.
const FEED: [&str; 7] = [
    "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68\r\n",
    "$GPGSV,3,1,11,20,75,131,26,01,40,223,20,11,37,246,22,22,30,067,20*79\r\n",
    "$GPGSV,3,2,11,14,25,306,18,03,25,101,23,06,21,050,20,19,14,333,18*74\r\n",
    "$GPGSV,3,3,11,05,09,199,13,23,09,073,17,18,07,179,,21,05,252,*7E\r\n",
    "$GPGLL,4916.45,N,12311.12,W,225444,A*31\r\n",
    "$GPGGA,225446,4916.45,N,12311.12,W,1,04,2.0,100.0,M,-33.9,M,,*56\r\n",
    "$GPGSA,A,3,20,01,11,14,,,,,,,,,2.0,2.0,2.0*39\r\n",
];

fn main() {
    env_logger::init();

    // a fixed local-time offset keeps the demo reproducible
    let decoder = Decoder::new(1);

    for line in FEED {
        log::debug!("raw: {}", line.trim_end());

        match decoder.decode(line) {
            Ok(sentence) => {
                log::info!("talker: {}", sentence.talker);
                describe(&sentence.record);
                match &sentence.checksum {
                    ChecksumResult::Valid => log::info!("checksum OK"),
                    ChecksumResult::Invalid { expected, found } => {
                        log::warn!("checksum invalid: calculated {expected:02X}, sentence says {found:02X}")
                    }
                    ChecksumResult::Unavailable(reason) => log::warn!("checksum unavailable: {reason}"),
                }
            }
            Err(error) => log::error!("discarding sentence: {error}"),
        }
    }
}

fn describe(record: &DecodedRecord) {
    match record {
        DecodedRecord::RMC(rmc) => {
            if let Some(time) = &rmc.time {
                log::info!("time: {time} (local)");
            }
            log::info!("status: {:?}", rmc.status);
            if let (Some(lat), Some(lon)) = (&rmc.latitude, &rmc.longitude) {
                log::info!("position: {lat}, {lon}");
            }
            if let Some(speed) = rmc.speed_knots {
                log::info!("speed: {speed} kn");
            }
        }
        DecodedRecord::GSV(gsv) => {
            log::info!(
                "satellites in view: {} (message {}/{})",
                gsv.satellites_in_view,
                gsv.message_number,
                gsv.total_messages
            );
            for sat in &gsv.satellites {
                log::info!(
                    "  PRN {:02} elevation {:?} azimuth {:?} SNR {:?}",
                    sat.prn,
                    sat.elevation,
                    sat.azimuth,
                    sat.snr
                );
            }
        }
        DecodedRecord::GLL(gll) => {
            if let (Some(lat), Some(lon)) = (&gll.latitude, &gll.longitude) {
                log::info!("position: {lat}, {lon}");
            }
            log::info!("status: {:?}", gll.status);
        }
        DecodedRecord::GGA(gga) => {
            log::info!("fix quality: {}", gga.fix_quality.description());
            if let Some(count) = gga.satellite_count {
                log::info!("satellites in use: {count}");
            }
            if let Some(hdop) = &gga.hdop {
                log::info!("HDOP: {}", hdop.value);
                if hdop.unavailable() {
                    log::info!("no HDOP available");
                }
                if hdop.poor_accuracy() {
                    log::info!("HDOP indicates poor accuracy");
                }
            }
            if let Some(altitude) = &gga.altitude {
                log::info!("altitude: {altitude}");
            }
        }
        DecodedRecord::GSA(gsa) => {
            log::info!("mode: {:?}, fix type: {:?}", gsa.mode, gsa.fix_type);
            log::info!("satellites used: {:?}", gsa.satellites.as_slice());
            log::info!(
                "PDOP/HDOP/VDOP: {:?}/{:?}/{:?}",
                gsa.pdop,
                gsa.hdop,
                gsa.vdop
            );
        }
        DecodedRecord::VTG(vtg) => {
            if let Some(track) = &vtg.true_track {
                log::info!("true track: {track}");
            }
            if let Some(knots) = vtg.speed_knots {
                log::info!("ground speed: {knots} kn");
            }
            log::info!("mode: {:?}", vtg.mode);
        }
    }
}
