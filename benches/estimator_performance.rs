use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use noaa_sun::noaa;
use noaa_sun::time::CalendarDay;
use noaa_sun::{GeoCoordinate, Zenith};
use std::hint::black_box;

fn benchmark_single_calculation(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
    let lat = 37.7749;
    let lon = -122.4194;

    c.bench_function("chrono_single", |b| {
        b.iter(|| {
            noaa::compute_solar_events(black_box(date), black_box(lat), black_box(lon)).unwrap()
        })
    });

    c.bench_function("numeric_single", |b| {
        b.iter(|| {
            noaa::sunrise_sunset_utc(
                black_box(2023),
                black_box(6),
                black_box(21),
                black_box(lat),
                black_box(lon),
            )
            .unwrap()
        })
    });

    let day = CalendarDay::new(2023, 6, 21).unwrap();
    let coordinate = GeoCoordinate::new(lat, lon).unwrap();
    c.bench_function("validated_single", |b| {
        b.iter(|| {
            noaa::solar_events(
                black_box(day),
                black_box(coordinate),
                black_box(Zenith::Official),
            )
        })
    });
}

fn benchmark_date_series_fixed_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("date_series_fixed_location");

    let base_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let lat = 48.21;
    let lon = 16.37;

    for &count in &[365, 3650, 36500] {
        group.throughput(Throughput::Elements(count));

        let dates: Vec<NaiveDate> = (0..count)
            .map(|i| base_date + Duration::days(i as i64))
            .collect();

        group.bench_with_input(BenchmarkId::new("chrono", count), &count, |b, _| {
            b.iter(|| {
                for &date in &dates {
                    let _result =
                        noaa::compute_solar_events(black_box(date), black_box(lat), black_box(lon))
                            .unwrap();
                }
            })
        });
    }

    group.finish();
}

fn benchmark_coordinate_sweep_fixed_date(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate_sweep_fixed_date");

    let day = CalendarDay::new(2023, 6, 21).unwrap();

    for &grid_size in &[30, 70, 150] {
        // 30x30, 70x70, 150x150 grids (~1K, 5K, 22K calculations)
        let count = grid_size * grid_size;
        group.throughput(Throughput::Elements(count as u64));

        // Includes the arctic so polar outcomes are exercised
        let coordinates: Vec<GeoCoordinate> = (0..grid_size)
            .flat_map(|i| {
                (0..grid_size).map(move |j| {
                    let lat = -60.0 + (i as f64) * 150.0 / grid_size as f64;
                    let lon = -180.0 + (j as f64) * 360.0 / grid_size as f64;
                    GeoCoordinate::new(lat, lon).unwrap()
                })
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("official", count), &count, |b, _| {
            b.iter(|| {
                for &coordinate in &coordinates {
                    let _result =
                        noaa::solar_events(black_box(day), black_box(coordinate), Zenith::Official);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("civil", count), &count, |b, _| {
            b.iter(|| {
                for &coordinate in &coordinates {
                    let _result =
                        noaa::solar_events(black_box(day), black_box(coordinate), Zenith::Civil);
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_date_series_fixed_location,
    benchmark_coordinate_sweep_fixed_date
);

criterion_main!(benches);
