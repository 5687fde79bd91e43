mod add_appends_to_index;
