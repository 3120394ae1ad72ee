//! Annual counts 2001-2012 for six Western and Middle Indian states.

use crate::error::DatasetError;
use crate::table::{CrimeTable, SeriesKey};

use crimecast_arima::Series;

/// First year of the built-in table.
pub const BUILTIN_START_YEAR: i32 = 2001;

type Rows = [(&'static str, [u32; 12]); 6];

const DATA: [(&str, Rows); 6] = [
    (
        "Chhattisgarh",
        [
            ("MURDER", [880, 844, 776, 927, 1013, 1098, 1097, 1169, 1083, 1065, 1110, 998]),
            ("RAPE", [959, 992, 898, 969, 990, 995, 982, 978, 976, 1012, 1053, 1034]),
            ("KIDNAPPING", [207, 178, 177, 214, 246, 239, 244, 273, 286, 359, 472, 450]),
            ("ROBBERY", [338, 326, 331, 363, 401, 439, 427, 500, 554, 552, 470, 412]),
            ("RIOTS", [871, 817, 703, 790, 893, 905, 881, 1144, 957, 1092, 934, 910]),
            ("COUNTERFEITING", [8, 18, 24, 42, 73, 33, 64, 71, 68, 59, 65, 53]),
        ],
    ),
    (
        "Gujarat",
        [
            ("MURDER", [1226, 1532, 1114, 1113, 1033, 1165, 1166, 1106, 1020, 1048, 1126, 1126]),
            ("RAPE", [286, 267, 236, 339, 324, 354, 316, 374, 433, 408, 439, 473]),
            ("KIDNAPPING", [998, 1015, 1044, 1133, 1164, 1128, 1312, 1323, 1348, 1447, 1614, 1720]),
            ("ROBBERY", [991, 1098, 1267, 1136, 966, 970, 1095, 1322, 1420, 1384, 1368, 1366]),
            ("RIOTS", [1930, 3665, 1824, 1599, 1628, 1534, 1668, 1809, 1539, 1623, 1615, 1758]),
            ("COUNTERFEITING", [55, 46, 275, 122, 447, 196, 286, 190, 238, 255, 256, 216]),
        ],
    ),
    (
        "Haryana",
        [
            ("MURDER", [781, 760, 702, 733, 784, 873, 911, 921, 948, 1005, 1062, 991]),
            ("RAPE", [398, 361, 353, 386, 461, 608, 488, 631, 603, 720, 733, 668]),
            ("KIDNAPPING", [449, 427, 388, 423, 492, 635, 801, 854, 916, 963, 959, 1349]),
            ("ROBBERY", [397, 330, 281, 244, 390, 410, 502, 555, 679, 734, 638, 711]),
            ("RIOTS", [750, 700, 639, 699, 899, 1142, 1173, 1184, 1166, 1414, 1466, 1424]),
            ("COUNTERFEITING", [37, 32, 30, 32, 31, 35, 33, 40, 35, 29, 18, 20]),
        ],
    ),
    (
        "Madhya Pradesh",
        [
            ("MURDER", [2425, 2395, 2227, 2379, 2405, 2309, 2244, 2322, 2386, 2423, 2511, 2373]),
            ("RAPE", [2851, 2891, 2738, 2875, 2921, 2900, 3010, 2937, 2998, 3135, 3406, 3425]),
            ("KIDNAPPING", [956, 964, 887, 832, 847, 808, 922, 929, 1036, 1187, 1288, 1302]),
            ("ROBBERY", [1764, 1829, 1578, 1526, 1557, 1770, 1975, 2234, 2270, 1919, 1952, 1940]),
            ("RIOTS", [3395, 3178, 2729, 2479, 2573, 2308, 2648, 2768, 2409, 2606, 2080, 1951]),
            ("COUNTERFEITING", [19, 54, 38, 36, 51, 38, 38, 47, 27, 33, 12, 31]),
        ],
    ),
    (
        "Maharashtra",
        [
            ("MURDER", [2839, 2768, 2772, 2696, 2621, 2656, 2693, 2795, 2653, 2744, 2818, 2712]),
            ("RAPE", [1302, 1352, 1268, 1388, 1545, 1500, 1451, 1558, 1483, 1599, 1701, 1839]),
            ("KIDNAPPING", [985, 953, 926, 1045, 1194, 1261, 1312, 1379, 1286, 1508, 1669, 1583]),
            ("ROBBERY", [2239, 2136, 2096, 2229, 2411, 2574, 2770, 3031, 3314, 3721, 4249, 6949]),
            ("RIOTS", [6719, 6360, 5714, 5980, 6779, 7453, 7993, 9388, 8030, 8412, 8556, 8860]),
            ("COUNTERFEITING", [265, 176, 261, 218, 385, 317, 270, 405, 478, 389, 351, 291]),
        ],
    ),
    (
        "Rajasthan",
        [
            ("MURDER", [1259, 1276, 1262, 1279, 1221, 1209, 1303, 1297, 1395, 1421, 1461, 1461]),
            ("RAPE", [1049, 1051, 1050, 1038, 993, 1085, 1238, 1355, 1519, 1571, 1800, 2049]),
            ("KIDNAPPING", [2718, 2587, 2238, 2384, 1993, 1970, 2177, 2358, 2870, 2985, 3204, 3243]),
            ("ROBBERY", [889, 734, 655, 673, 590, 631, 778, 829, 886, 872, 727, 807]),
            ("RIOTS", [11214, 7178, 4052, 3101, 2290, 1767, 1626, 1390, 1145, 986, 751, 573]),
            ("COUNTERFEITING", [89, 63, 58, 65, 88, 56, 56, 51, 59, 36, 56, 49]),
        ],
    ),
];

impl CrimeTable {
    /// The bundled 2001-2012 table: 6 states × 6 crime categories.
    ///
    /// # Example
    ///
    /// ```
    /// use crimecast_dataset::CrimeTable;
    ///
    /// let table = CrimeTable::builtin().unwrap();
    /// assert_eq!(table.len(), 36);
    /// let murders = table.get("Chhattisgarh", "MURDER").unwrap();
    /// assert_eq!(murders.values()[0], 880.0);
    /// ```
    pub fn builtin() -> Result<Self, DatasetError> {
        let mut table = CrimeTable::new();
        for (region, rows) in DATA {
            for (category, counts) in rows {
                let values = counts.iter().map(|&c| f64::from(c)).collect();
                let series = Series::new(BUILTIN_START_YEAR, values)
                    .map_err(|e| DatasetError::invalid_series(region, category, e))?;
                table.insert(SeriesKey::new(region, category), series);
            }
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_state_and_category() {
        let table = CrimeTable::builtin().unwrap();
        assert_eq!(table.regions().len(), 6);
        for region in table.regions() {
            assert_eq!(table.region_series(region).count(), 6);
        }
    }

    #[test]
    fn builtin_years() {
        let table = CrimeTable::builtin().unwrap();
        assert_eq!(table.year_span(), Some((2001, 2012)));
    }

    #[test]
    fn builtin_last_values() {
        let table = CrimeTable::builtin().unwrap();
        let riots = table.get("Rajasthan", "RIOTS").unwrap();
        assert_eq!(riots.values()[11], 573.0);
        let robbery = table.get("Maharashtra", "ROBBERY").unwrap();
        assert_eq!(robbery.values()[11], 6949.0);
    }
}
