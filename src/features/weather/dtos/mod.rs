mod weather_dto;

pub use weather_dto::WeatherQuery;
