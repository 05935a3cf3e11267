use crate::state::{Chemical, Column};

pub const CSV_FILE_NAME: &str = "chemicals.csv";

/// Header line plus one comma-joined line per record.
///
/// Fields are written verbatim; embedded commas are not quoted.
pub fn to_csv(records: &[Chemical]) -> String {
    let header = Column::ALL.map(Column::header).join(",");
    let rows = records.iter().map(|record| {
        Column::ALL
            .iter()
            .map(|&column| record.cell_text(column))
            .collect::<Vec<_>>()
            .join(",")
    });

    std::iter::once(header).chain(rows).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PackSize;
    use pretty_assertions::assert_eq;

    fn acetone() -> Chemical {
        Chemical {
            name: "Acetone".to_string(),
            vendor: "X".to_string(),
            density: 0.79,
            viscosity: 0.32,
            packaging: "Drum".to_string(),
            pack_size: PackSize::Number(20.0),
            unit: "L".to_string(),
            quantity: 5.0,
        }
    }

    #[test]
    fn single_record() {
        let csv = to_csv(&[acetone()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Name,Vendor,Density,Viscosity,Packaging,Pack Size,Unit,Quantity",
                "Acetone,X,0.79,0.32,Drum,20,L,5",
            ]
        );
    }

    #[test]
    fn empty_table_is_header_only() {
        assert_eq!(
            to_csv(&[]),
            "Name,Vendor,Density,Viscosity,Packaging,Pack Size,Unit,Quantity"
        );
    }

    #[test]
    fn rows_follow_list_order() {
        let mut ethanol = acetone();
        ethanol.name = "Ethanol".to_string();
        ethanol.pack_size = PackSize::Text("4x1L".to_string());

        let csv = to_csv(&[ethanol, acetone()]);
        let names: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["Ethanol", "Acetone"]);
        assert!(csv.contains(",4x1L,"));
    }

    #[test]
    fn embedded_commas_are_not_escaped() {
        let mut chem = acetone();
        chem.vendor = "Acme, Inc".to_string();
        let csv = to_csv(&[chem]);
        assert!(csv.ends_with("Acetone,Acme, Inc,0.79,0.32,Drum,20,L,5"));
    }
}
