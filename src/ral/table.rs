use super::RalColor;

const fn color(
    code: &'static str,
    name: &'static str,
    hex: &'static str,
    r: u8,
    g: u8,
    b: u8,
) -> RalColor {
    RalColor { code, name, hex, r, g, b }
}

/// RAL Classic collection in catalogue order.
pub static RAL_CLASSIC: &[RalColor] = &[
    color("RAL 1000", "Green beige", "#CDBA88", 205, 186, 136),
    color("RAL 1001", "Beige", "#D0B084", 208, 176, 132),
    color("RAL 1002", "Sand yellow", "#D2AA6D", 210, 170, 109),
    color("RAL 1003", "Signal yellow", "#F9A800", 249, 168, 0),
    color("RAL 1004", "Golden yellow", "#E49E00", 228, 158, 0),
    color("RAL 1005", "Honey yellow", "#CB8E00", 203, 142, 0),
    color("RAL 1006", "Maize yellow", "#E29000", 226, 144, 0),
    color("RAL 1007", "Daffodil yellow", "#E88C00", 232, 140, 0),
    color("RAL 1011", "Brown beige", "#AF804F", 175, 128, 79),
    color("RAL 1012", "Lemon yellow", "#DDAF27", 221, 175, 39),
    color("RAL 1013", "Oyster white", "#E3D9C6", 227, 217, 198),
    color("RAL 1014", "Ivory", "#DDC49A", 221, 196, 154),
    color("RAL 1015", "Light ivory", "#E6D2B5", 230, 210, 181),
    color("RAL 1016", "Sulfur yellow", "#F1DD38", 241, 221, 56),
    color("RAL 1017", "Saffron yellow", "#F6A950", 246, 169, 80),
    color("RAL 1018", "Zinc yellow", "#FACA30", 250, 202, 48),
    color("RAL 1019", "Grey beige", "#A48F7A", 164, 143, 122),
    color("RAL 1020", "Olive yellow", "#A08F65", 160, 143, 101),
    color("RAL 1021", "Rape yellow", "#F6B600", 246, 182, 0),
    color("RAL 1023", "Traffic yellow", "#F7B500", 247, 181, 0),
    color("RAL 1024", "Ochre yellow", "#BA8F4C", 186, 143, 76),
    color("RAL 1026", "Luminous yellow", "#FFFF00", 255, 255, 0),
    color("RAL 1027", "Curry", "#A77F0E", 167, 127, 14),
    color("RAL 1028", "Melon yellow", "#FF9B00", 255, 155, 0),
    color("RAL 1032", "Broom yellow", "#E2A300", 226, 163, 0),
    color("RAL 1033", "Dahlia yellow", "#F99A1C", 249, 154, 28),
    color("RAL 1034", "Pastel yellow", "#EB9C52", 235, 156, 82),
    color("RAL 1035", "Pearl beige", "#908370", 144, 131, 112),
    color("RAL 1036", "Pearl gold", "#80643F", 128, 100, 63),
    color("RAL 1037", "Sun yellow", "#F09200", 240, 146, 0),
    color("RAL 2000", "Yellow orange", "#DA6E00", 218, 110, 0),
    color("RAL 2001", "Red orange", "#BA481B", 186, 72, 27),
    color("RAL 2002", "Vermilion", "#BF3922", 191, 57, 34),
    color("RAL 2003", "Pastel orange", "#F67828", 246, 120, 40),
    color("RAL 2004", "Pure orange", "#E25303", 226, 83, 3),
    color("RAL 2005", "Luminous orange", "#FF4D06", 255, 77, 6),
    color("RAL 2007", "Luminous bright orange", "#FFB200", 255, 178, 0),
    color("RAL 2008", "Bright red orange", "#ED6B21", 237, 107, 33),
    color("RAL 2009", "Traffic orange", "#DE5307", 222, 83, 7),
    color("RAL 2010", "Signal orange", "#D05D28", 208, 93, 40),
    color("RAL 2011", "Deep orange", "#E26E0E", 226, 110, 14),
    color("RAL 2012", "Salmon orange", "#D5654D", 213, 101, 77),
    color("RAL 2013", "Pearl orange", "#923E25", 146, 62, 37),
    color("RAL 3000", "Flame red", "#A72920", 167, 41, 32),
    color("RAL 3001", "Signal red", "#9B2423", 155, 36, 35),
    color("RAL 3002", "Carmine red", "#9B2321", 155, 35, 33),
    color("RAL 3003", "Ruby red", "#861A22", 134, 26, 34),
    color("RAL 3004", "Purple red", "#6B1C23", 107, 28, 35),
    color("RAL 3005", "Wine red", "#59191F", 89, 25, 31),
    color("RAL 3007", "Black red", "#3E2022", 62, 32, 34),
    color("RAL 3009", "Oxide red", "#6D342D", 109, 52, 45),
    color("RAL 3011", "Brown red", "#792423", 121, 36, 35),
    color("RAL 3012", "Beige red", "#C6846D", 198, 132, 109),
    color("RAL 3013", "Tomato red", "#972E25", 151, 46, 37),
    color("RAL 3014", "Antique pink", "#CB7375", 203, 115, 117),
    color("RAL 3015", "Light pink", "#D8A0A6", 216, 160, 166),
    color("RAL 3016", "Coral red", "#A63D2F", 166, 61, 47),
    color("RAL 3017", "Rose", "#CB555D", 203, 85, 93),
    color("RAL 3018", "Strawberry red", "#C73F4A", 199, 63, 74),
    color("RAL 3020", "Traffic red", "#BB1E10", 187, 30, 16),
    color("RAL 3022", "Salmon pink", "#CF6955", 207, 105, 85),
    color("RAL 3024", "Luminous red", "#FF2D21", 255, 45, 33),
    color("RAL 3026", "Luminous bright red", "#FF2A1B", 255, 42, 27),
    color("RAL 3027", "Raspberry red", "#AB273C", 171, 39, 60),
    color("RAL 3028", "Pure red", "#CC2C24", 204, 44, 36),
    color("RAL 3031", "Orient red", "#A63437", 166, 52, 55),
    color("RAL 3032", "Pearl ruby red", "#701D23", 112, 29, 35),
    color("RAL 3033", "Pearl pink", "#A53A2D", 165, 58, 45),
    color("RAL 4001", "Red lilac", "#816183", 129, 97, 131),
    color("RAL 4002", "Red violet", "#8D3C4B", 141, 60, 75),
    color("RAL 4003", "Heather violet", "#C4618C", 196, 97, 140),
    color("RAL 4004", "Claret violet", "#651E38", 101, 30, 56),
    color("RAL 4005", "Blue lilac", "#76689A", 118, 104, 154),
    color("RAL 4006", "Traffic purple", "#903373", 144, 51, 115),
    color("RAL 4007", "Purple violet", "#47243C", 71, 36, 60),
    color("RAL 4008", "Signal violet", "#844C82", 132, 76, 130),
    color("RAL 4009", "Pastel violet", "#9D8692", 157, 134, 146),
    color("RAL 4010", "Telemagenta", "#BC4077", 188, 64, 119),
    color("RAL 4011", "Pearl violet", "#6E6387", 110, 99, 135),
    color("RAL 4012", "Pearl blackberry", "#6B6B7F", 107, 107, 127),
    color("RAL 5000", "Violet blue", "#314F6F", 49, 79, 111),
    color("RAL 5001", "Green blue", "#0F4C64", 15, 76, 100),
    color("RAL 5002", "Ultramarine blue", "#00387B", 0, 56, 123),
    color("RAL 5003", "Sapphire blue", "#1F3855", 31, 56, 85),
    color("RAL 5004", "Black blue", "#191E28", 25, 30, 40),
    color("RAL 5005", "Signal blue", "#005387", 0, 83, 135),
    color("RAL 5007", "Brilliant blue", "#376B8C", 55, 107, 140),
    color("RAL 5008", "Grey blue", "#2B3A44", 43, 58, 68),
    color("RAL 5009", "Azure blue", "#225F78", 34, 95, 120),
    color("RAL 5010", "Gentian blue", "#004F7C", 0, 79, 124),
    color("RAL 5011", "Steel blue", "#1A2B3C", 26, 43, 60),
    color("RAL 5012", "Light blue", "#0089B6", 0, 137, 182),
    color("RAL 5013", "Cobalt blue", "#193153", 25, 49, 83),
    color("RAL 5014", "Pigeon blue", "#637D96", 99, 125, 150),
    color("RAL 5015", "Sky blue", "#007CB0", 0, 124, 176),
    color("RAL 5017", "Traffic blue", "#005B8C", 0, 91, 140),
    color("RAL 5018", "Turquoise blue", "#058B8C", 5, 139, 140),
    color("RAL 5019", "Capri blue", "#005E83", 0, 94, 131),
    color("RAL 5020", "Ocean blue", "#00414B", 0, 65, 75),
    color("RAL 5021", "Water blue", "#007577", 0, 117, 119),
    color("RAL 5022", "Night blue", "#222D5A", 34, 45, 90),
    color("RAL 5023", "Distant blue", "#41698C", 65, 105, 140),
    color("RAL 5024", "Pastel blue", "#6093AC", 96, 147, 172),
    color("RAL 5025", "Pearl gentian blue", "#20697C", 32, 105, 124),
    color("RAL 5026", "Pearl night blue", "#0F3052", 15, 48, 82),
    color("RAL 6000", "Patina green", "#3C7460", 60, 116, 96),
    color("RAL 6001", "Emerald green", "#366735", 54, 103, 53),
    color("RAL 6002", "Leaf green", "#325928", 50, 89, 40),
    color("RAL 6003", "Olive green", "#50533C", 80, 83, 60),
    color("RAL 6004", "Blue green", "#024442", 2, 68, 66),
    color("RAL 6005", "Moss green", "#114232", 17, 66, 50),
    color("RAL 6006", "Grey olive", "#3C392E", 60, 57, 46),
    color("RAL 6007", "Bottle green", "#2C3222", 44, 50, 34),
    color("RAL 6008", "Brown green", "#37342A", 55, 52, 42),
    color("RAL 6009", "Fir green", "#27352A", 39, 53, 42),
    color("RAL 6010", "Grass green", "#4D6F39", 77, 111, 57),
    color("RAL 6011", "Reseda green", "#6C7C59", 108, 124, 89),
    color("RAL 6012", "Black green", "#303D3A", 48, 61, 58),
    color("RAL 6013", "Reed green", "#7D765A", 125, 118, 90),
    color("RAL 6014", "Yellow olive", "#474135", 71, 65, 53),
    color("RAL 6015", "Black olive", "#3D3D36", 61, 61, 54),
    color("RAL 6016", "Turquoise green", "#00694C", 0, 105, 76),
    color("RAL 6017", "May green", "#587F40", 88, 127, 64),
    color("RAL 6018", "Yellow green", "#61993B", 97, 153, 59),
    color("RAL 6019", "Pastel green", "#B9CEAC", 185, 206, 172),
    color("RAL 6020", "Chrome green", "#37422F", 55, 66, 47),
    color("RAL 6021", "Pale green", "#8A9977", 138, 153, 119),
    color("RAL 6022", "Olive drab", "#3A3327", 58, 51, 39),
    color("RAL 6024", "Traffic green", "#008351", 0, 131, 81),
    color("RAL 6025", "Fern green", "#5E6E3B", 94, 110, 59),
    color("RAL 6026", "Opal green", "#005F4E", 0, 95, 78),
    color("RAL 6027", "Light green", "#7EBAB5", 126, 186, 181),
    color("RAL 6028", "Pine green", "#315442", 49, 84, 66),
    color("RAL 6029", "Mint green", "#006F3D", 0, 111, 61),
    color("RAL 6032", "Signal green", "#237F52", 35, 127, 82),
    color("RAL 6033", "Mint turquoise", "#46877F", 70, 135, 127),
    color("RAL 6034", "Pastel turquoise", "#7AACAC", 122, 172, 172),
    color("RAL 6035", "Pearl green", "#194D25", 25, 77, 37),
    color("RAL 6036", "Pearl opal green", "#04574B", 4, 87, 75),
    color("RAL 6037", "Pure green", "#008B29", 0, 139, 41),
    color("RAL 6038", "Luminous green", "#00B51A", 0, 181, 26),
    color("RAL 7000", "Squirrel grey", "#7A888E", 122, 136, 142),
    color("RAL 7001", "Silver grey", "#8C969D", 140, 150, 157),
    color("RAL 7002", "Olive grey", "#817863", 129, 120, 99),
    color("RAL 7003", "Moss grey", "#7A7669", 122, 118, 105),
    color("RAL 7004", "Signal grey", "#9B9B9B", 155, 155, 155),
    color("RAL 7005", "Mouse grey", "#6C6E6B", 108, 110, 107),
    color("RAL 7006", "Beige grey", "#766A5E", 118, 106, 94),
    color("RAL 7008", "Khaki grey", "#745E3D", 116, 94, 61),
    color("RAL 7009", "Green grey", "#5D6058", 93, 96, 88),
    color("RAL 7010", "Tarpaulin grey", "#585C56", 88, 92, 86),
    color("RAL 7011", "Iron grey", "#52595D", 82, 89, 93),
    color("RAL 7012", "Basalt grey", "#575D5E", 87, 93, 94),
    color("RAL 7013", "Brown grey", "#575044", 87, 80, 68),
    color("RAL 7015", "Slate grey", "#4F5358", 79, 83, 88),
    color("RAL 7016", "Anthracite grey", "#383E42", 56, 62, 66),
    color("RAL 7021", "Black grey", "#2F3234", 47, 50, 52),
    color("RAL 7022", "Umbra grey", "#4C4A44", 76, 74, 68),
    color("RAL 7023", "Concrete grey", "#808076", 128, 128, 118),
    color("RAL 7024", "Graphite grey", "#45494E", 69, 73, 78),
    color("RAL 7026", "Granite grey", "#374345", 55, 67, 69),
    color("RAL 7030", "Stone grey", "#928E85", 146, 142, 133),
    color("RAL 7031", "Blue grey", "#5B686D", 91, 104, 109),
    color("RAL 7032", "Pebble grey", "#B5B0A1", 181, 176, 161),
    color("RAL 7033", "Cement grey", "#7F8274", 127, 130, 116),
    color("RAL 7034", "Yellow grey", "#92886F", 146, 136, 111),
    color("RAL 7035", "Light grey", "#C5C7C4", 197, 199, 196),
    color("RAL 7036", "Platinum grey", "#979392", 151, 147, 146),
    color("RAL 7037", "Dusty grey", "#7A7B7A", 122, 123, 122),
    color("RAL 7038", "Agate grey", "#B0B0A9", 176, 176, 169),
    color("RAL 7039", "Quartz grey", "#6B665E", 107, 102, 94),
    color("RAL 7040", "Window grey", "#989EA1", 152, 158, 161),
    color("RAL 7042", "Traffic grey A", "#8E9291", 142, 146, 145),
    color("RAL 7043", "Traffic grey B", "#4F5250", 79, 82, 80),
    color("RAL 7044", "Silk grey", "#B7B3A8", 183, 179, 168),
    color("RAL 7045", "Telegrey 1", "#8D9295", 141, 146, 149),
    color("RAL 7046", "Telegrey 2", "#7F868A", 127, 134, 138),
    color("RAL 7047", "Telegrey 4", "#C8C8C7", 200, 200, 199),
    color("RAL 7048", "Pearl mouse grey", "#817B73", 129, 123, 115),
    color("RAL 8000", "Green brown", "#89693F", 137, 105, 63),
    color("RAL 8001", "Ochre brown", "#9D622B", 157, 98, 43),
    color("RAL 8002", "Signal brown", "#794D3E", 121, 77, 62),
    color("RAL 8003", "Clay brown", "#7E4B27", 126, 75, 39),
    color("RAL 8004", "Copper brown", "#8D4931", 141, 73, 49),
    color("RAL 8007", "Fawn brown", "#70462B", 112, 70, 43),
    color("RAL 8008", "Olive brown", "#724A25", 114, 74, 37),
    color("RAL 8011", "Nut brown", "#5A3826", 90, 56, 38),
    color("RAL 8012", "Red brown", "#66332B", 102, 51, 43),
    color("RAL 8014", "Sepia brown", "#4A3526", 74, 53, 38),
    color("RAL 8015", "Chestnut brown", "#5E2F26", 94, 47, 38),
    color("RAL 8016", "Mahogany brown", "#4C2B20", 76, 43, 32),
    color("RAL 8017", "Chocolate brown", "#442F29", 68, 47, 41),
    color("RAL 8019", "Grey brown", "#3D3635", 61, 54, 53),
    color("RAL 8022", "Black brown", "#1A1718", 26, 23, 24),
    color("RAL 8023", "Orange brown", "#A45729", 164, 87, 41),
    color("RAL 8024", "Beige brown", "#795038", 121, 80, 56),
    color("RAL 8025", "Pale brown", "#755847", 117, 88, 71),
    color("RAL 8028", "Terra brown", "#513A2A", 81, 58, 42),
    color("RAL 8029", "Pearl copper", "#7F4031", 127, 64, 49),
    color("RAL 9001", "Cream", "#E9E0D2", 233, 224, 210),
    color("RAL 9002", "Grey white", "#D7D5CB", 215, 213, 203),
    color("RAL 9003", "Signal white", "#ECECE7", 236, 236, 231),
    color("RAL 9004", "Signal black", "#2B2B2C", 43, 43, 44),
    color("RAL 9005", "Jet black", "#0E0E10", 14, 14, 16),
    color("RAL 9006", "White aluminium", "#A1A1A0", 161, 161, 160),
    color("RAL 9007", "Grey aluminium", "#878581", 135, 133, 129),
    color("RAL 9010", "Pure white", "#F1ECE1", 241, 236, 225),
    color("RAL 9011", "Graphite black", "#27292B", 39, 41, 43),
    color("RAL 9012", "Clean room white", "#F8F2E1", 248, 242, 225),
    color("RAL 9016", "Traffic white", "#F1F0EA", 241, 240, 234),
    color("RAL 9017", "Traffic black", "#2A292A", 42, 41, 42),
    color("RAL 9018", "Papyrus white", "#C8CBC4", 200, 203, 196),
    color("RAL 9022", "Pearl light grey", "#858583", 133, 133, 131),
    color("RAL 9023", "Pearl dark grey", "#797B7A", 121, 123, 122),
];
