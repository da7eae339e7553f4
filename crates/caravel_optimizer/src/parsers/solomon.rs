use std::path::Path;

use crate::{
    parsers::parser::DatasetParser,
    problem::{
        customer::CustomerBuilder,
        location::Location,
        time_window::TimeWindow,
        vehicle_routing_problem::{VehicleRoutingProblem, VehicleRoutingProblemBuilder},
    },
};

/// Parser for the Solomon VRPTW benchmark format: an instance name, a
/// `VEHICLE` section with fleet size and capacity, and a `CUSTOMER` table
/// whose first row (customer 0) is the depot.
pub struct SolomonParser;

impl DatasetParser for SolomonParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<VehicleRoutingProblem, anyhow::Error> {
        let file_content = std::fs::read_to_string(file)?;
        let instance = parse(&file_content)?;
        build_problem(&instance)
    }
}

#[derive(Debug, Clone)]
pub struct SolomonInstance {
    pub name: String,
    pub vehicle_count: usize,
    pub vehicle_capacity: f64,
    pub rows: Vec<SolomonRow>,
}

#[derive(Debug, Clone, Copy)]
pub struct SolomonRow {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub demand: f64,
    pub ready_time: f64,
    pub due_date: f64,
    pub service_time: f64,
}

enum Section {
    Header,
    Vehicle,
    Customer,
}

pub fn parse(text: &str) -> Result<SolomonInstance, anyhow::Error> {
    let mut name: Option<String> = None;
    let mut vehicle: Option<(usize, f64)> = None;
    let mut rows: Vec<SolomonRow> = Vec::new();

    let mut section = Section::Header;

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        match line.to_uppercase().as_str() {
            "VEHICLE" => {
                section = Section::Vehicle;
                continue;
            }
            "CUSTOMER" => {
                section = Section::Customer;
                continue;
            }
            _ => {}
        }

        match section {
            Section::Header => {
                if name.is_none() {
                    name = Some(line.to_owned());
                }
            }
            Section::Vehicle => {
                // Skip the "NUMBER CAPACITY" header; the first fully numeric
                // line carries the fleet description.
                let fields: Vec<&str> = line.split_whitespace().collect();
                if vehicle.is_none()
                    && fields.len() == 2
                    && let (Ok(count), Ok(capacity)) =
                        (fields[0].parse::<usize>(), fields[1].parse::<f64>())
                {
                    vehicle = Some((count, capacity));
                }
            }
            Section::Customer => {
                let fields: Vec<&str> = line.split_whitespace().collect();
                if fields.len() != 7 {
                    continue;
                }

                let Ok(id) = fields[0].parse::<usize>() else {
                    continue; // column header
                };

                let numbers = fields[1..]
                    .iter()
                    .map(|field| field.parse::<f64>())
                    .collect::<Result<Vec<f64>, _>>()
                    .map_err(|_| anyhow::anyhow!("invalid customer row: {line}"))?;

                rows.push(SolomonRow {
                    id,
                    x: numbers[0],
                    y: numbers[1],
                    demand: numbers[2],
                    ready_time: numbers[3],
                    due_date: numbers[4],
                    service_time: numbers[5],
                });
            }
        }
    }

    let name = name.ok_or_else(|| anyhow::anyhow!("missing instance name"))?;
    let (vehicle_count, vehicle_capacity) =
        vehicle.ok_or_else(|| anyhow::anyhow!("missing VEHICLE section"))?;

    if rows.is_empty() {
        anyhow::bail!("missing CUSTOMER section");
    }

    Ok(SolomonInstance {
        name,
        vehicle_count,
        vehicle_capacity,
        rows,
    })
}

pub fn build_problem(instance: &SolomonInstance) -> Result<VehicleRoutingProblem, anyhow::Error> {
    let depot = instance
        .rows
        .first()
        .ok_or_else(|| anyhow::anyhow!("instance has no depot row"))?;

    let locations = instance
        .rows
        .iter()
        .map(|row| Location::from_cartesian(row.x, row.y))
        .collect::<Vec<_>>();

    let customers = instance
        .rows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(location_id, row)| {
            let mut builder = CustomerBuilder::default();

            builder.set_external_id(format!("{}", row.id));
            builder.set_location_id(location_id);
            builder.set_demand(row.demand);
            builder.set_service_duration(row.service_time);
            builder.set_time_window(TimeWindow::new(row.ready_time, row.due_date));

            builder.build()
        })
        .collect::<Vec<_>>();

    let mut builder = VehicleRoutingProblemBuilder::default();
    builder.set_locations(locations);
    builder.set_customers(customers);
    builder.set_depot_location_id(0);
    builder.set_depot_time_window(TimeWindow::new(depot.ready_time, depot.due_date));
    builder.set_vehicle_count(instance.vehicle_count);
    builder.set_vehicle_capacity(instance.vehicle_capacity);

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
C101

VEHICLE
NUMBER     CAPACITY
  25         200

CUSTOMER
CUST NO.  XCOORD.   YCOORD.    DEMAND   READY TIME  DUE DATE   SERVICE TIME
    0      40         50          0          0       1236          0
    1      45         68         10        912        967         90
    2      45         70         30        825        870         90
";

    #[test]
    fn test_parse_sample() {
        let instance = parse(SAMPLE).unwrap();

        assert_eq!(instance.name, "C101");
        assert_eq!(instance.vehicle_count, 25);
        assert_eq!(instance.vehicle_capacity, 200.0);
        assert_eq!(instance.rows.len(), 3);
        assert_eq!(instance.rows[0].x, 40.0);
        assert_eq!(instance.rows[2].demand, 30.0);
        assert_eq!(instance.rows[1].due_date, 967.0);
    }

    #[test]
    fn test_build_problem_splits_depot_from_customers() {
        let instance = parse(SAMPLE).unwrap();
        let problem = build_problem(&instance).unwrap();

        assert_eq!(problem.customers().len(), 2);
        assert_eq!(problem.locations().len(), 3);
        assert_eq!(problem.vehicle_count(), 25);
        assert_eq!(problem.depot_time_window().end(), 1236.0);
        assert_eq!(problem.customers()[0].external_id(), "1");
        assert_eq!(problem.customers()[0].due_date(), 967.0);
        assert!(problem.validate().is_ok());
    }

    #[test]
    fn test_parse_rejects_missing_vehicle_section() {
        let error = parse("C101\n\nCUSTOMER\n 0 1 1 0 0 10 0\n").unwrap_err();

        assert!(error.to_string().contains("VEHICLE"));
    }
}
