//! Weather families.
//!
//! Forecast entries are embedded messages decoded together with their parent:
//! once the parent decodes, every entry is kept, in wire order.

use super::common::read_payload;
use crate::header::normalize_header;
use crate::numeric::reconcile;
use crate::{
    CurrentWeather, DailyForecast, DailyForecastEntry, DecodeError, HourlyForecast,
    HourlyForecastEntry, wire,
};

pub(crate) fn parse_current_weather(payload: &[u8]) -> Result<CurrentWeather, DecodeError> {
    let raw: wire::CurrentWeather = read_payload(payload)?;
    Ok(CurrentWeather {
        header: normalize_header(raw.header.as_ref()),
        latitude: raw.latitude,
        longitude: raw.longitude,
        timezone: raw.timezone,
        temperature_2m: raw.temperature_2m,
        relative_humidity_2m: raw.relative_humidity_2m,
        apparent_temperature: raw.apparent_temperature,
        precipitation: raw.precipitation,
        rain: raw.rain,
        weather_code: raw.weather_code,
        cloud_cover: raw.cloud_cover,
        pressure_msl: raw.pressure_msl,
        surface_pressure: raw.surface_pressure,
        wind_speed_10m: raw.wind_speed_10m,
        wind_direction_10m: raw.wind_direction_10m,
        wind_gusts_10m: raw.wind_gusts_10m,
        is_day: raw.is_day,
    })
}

pub(crate) fn parse_hourly_forecast(payload: &[u8]) -> Result<HourlyForecast, DecodeError> {
    let raw: wire::HourlyForecast = read_payload(payload)?;
    let entries: Vec<_> = raw.entries.into_iter().map(hourly_entry).collect();

    tracing::debug!(entries = entries.len(), "decoded hourly forecast");
    Ok(HourlyForecast {
        header: normalize_header(raw.header.as_ref()),
        latitude: raw.latitude,
        longitude: raw.longitude,
        timezone: raw.timezone,
        entries,
    })
}

pub(crate) fn parse_daily_forecast(payload: &[u8]) -> Result<DailyForecast, DecodeError> {
    let raw: wire::DailyForecast = read_payload(payload)?;
    let entries: Vec<_> = raw.entries.into_iter().map(daily_entry).collect();

    tracing::debug!(entries = entries.len(), "decoded daily forecast");
    Ok(DailyForecast {
        header: normalize_header(raw.header.as_ref()),
        latitude: raw.latitude,
        longitude: raw.longitude,
        timezone: raw.timezone,
        entries,
    })
}

fn hourly_entry(raw: wire::HourlyForecastEntry) -> HourlyForecastEntry {
    HourlyForecastEntry {
        time: reconcile(raw.time),
        temperature_2m: raw.temperature_2m,
        relative_humidity_2m: raw.relative_humidity_2m,
        precipitation_probability: raw.precipitation_probability,
        precipitation: raw.precipitation,
        weather_code: raw.weather_code,
        wind_speed_10m: raw.wind_speed_10m,
        wind_direction_10m: raw.wind_direction_10m,
        cloud_cover: raw.cloud_cover,
    }
}

fn daily_entry(raw: wire::DailyForecastEntry) -> DailyForecastEntry {
    DailyForecastEntry {
        time: reconcile(raw.time),
        temperature_2m_max: raw.temperature_2m_max,
        temperature_2m_min: raw.temperature_2m_min,
        precipitation_sum: raw.precipitation_sum,
        precipitation_probability_max: raw.precipitation_probability_max,
        weather_code: raw.weather_code,
        wind_speed_10m_max: raw.wind_speed_10m_max,
        wind_gusts_10m_max: raw.wind_gusts_10m_max,
        wind_direction_10m_dominant: raw.wind_direction_10m_dominant,
    }
}
